use std::collections::HashSet;

use ds_classics::trie::Trie;

use crate::Word;

quickcheck::quickcheck! {
    fn matches_hash_set(words: Vec<Word>, probes: Vec<Word>) -> bool {
        let mut trie = Trie::new();
        let mut set = HashSet::new();
        for Word(word) in &words {
            assert_eq!(trie.insert(word), set.insert(word.clone()));
        }

        trie.len() == set.len()
            && probes.iter().all(|Word(probe)| {
                trie.search(probe) == set.contains(probe)
                    && trie.starts_with(probe)
                        == (probe.is_empty() || set.iter().any(|w| w.starts_with(probe.as_str())))
            })
    }
}
