//! Four classic data structures, each standing on its own, mostly for educational purposes.
//!
//! - [`avl`]: an insert-only, self-balancing binary search tree.
//! - [`linked_list`]: a doubly linked list with owning `next` links and non-owning `prev` links.
//! - [`trie`]: a prefix tree answering whole-word and prefix queries.
//! - [`binary_search`]: iterative bisection over a sorted slice.
//!
//! ## AVL Tree
//!
//! A Binary Search Tree keeps, for every `Node`, smaller keys in its left subtree and larger
//! keys in its right subtree, so lookups take `O(height)`. Inserting keys in sorted order into a
//! plain BST makes it degenerate into a list with height `N`. An AVL tree prevents this by
//! keeping, for every `Node`, the heights of its two subtrees within one of each other. After
//! each insert the `Node`s on the path back up to the root are checked and, where that balance is
//! broken, restored with one or two rotations. The height then stays below roughly
//! `1.44 * lg(N + 2)`.
//!
//! None of these structures are thread safe, and none of their operations can fail: absence is
//! reported as `false` or `None`, never as an error.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod binary_search;
pub mod linked_list;
pub mod trie;
