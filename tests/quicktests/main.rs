//! Property tests run against the public API of each structure.

mod avl;
mod trie;

use quickcheck::{Arbitrary, Gen};

/// A short word over a three letter alphabet, so random words often share prefixes.
#[derive(Clone, Debug)]
pub struct Word(pub String);

impl Arbitrary for Word {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 6;
        let word = (0..len)
            .map(|_| *g.choose(&['a', 'b', 'c']).unwrap())
            .collect();
        Word(word)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let word = self.0.clone();
        Box::new((0..word.len()).map(move |end| Word(word[..end].to_string())))
    }
}
