//! A prefix tree over `char`s.
//!
//! # Examples
//!
//! ```
//! use ds_classics::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["hello", "hell", "heaven", "heavy"] {
//!     trie.insert(word);
//! }
//!
//! assert!(trie.search("hell"));
//! assert!(!trie.search("he"));
//! assert!(trie.starts_with("hea"));
//! assert!(!trie.starts_with("hez"));
//! ```

use std::collections::HashMap;

/// A set of words supporting whole-word and prefix lookups.
///
/// Dropping is iterative, but `Clone` and `Debug` recurse once per character of the longest
/// stored word.
#[derive(Clone, Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_end_of_word: bool,
}

impl Drop for TrieNode {
    // Each character is one level of nesting, so tear the children down from an explicit stack.
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, n)| n).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl Trie {
    /// Generates a new, empty `Trie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `word`, creating nodes for any characters not already present.
    ///
    /// Returns `false` if the word was already stored, in which case nothing changes.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }

        let inserted = !node.is_end_of_word;
        node.is_end_of_word = true;
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns `true` if `word` was inserted as a whole word. A word that is only a prefix of
    /// stored words is not found.
    pub fn search(&self, word: &str) -> bool {
        self.descend(word).map_or(false, |node| node.is_end_of_word)
    }

    /// Returns `true` if any stored word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.descend(prefix).is_some()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn descend(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }
}
