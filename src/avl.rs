//! An insert-only AVL tree built from owned, recursively nested subtrees.
//!
//! There is no persistent "tree object" holding a root pointer. Instead,
//! [`Tree::insert`] consumes a subtree and returns the root of the rebalanced
//! subtree, so the caller reassigns the root after every insertion. Equal keys
//! are never rejected or merged: a key equal to a node's key is routed into that
//! node's right subtree.
//!
//! # Examples
//!
//! ```
//! use ds_classics::avl::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [10, 20, 30, 40, 50, 25] {
//!     tree = tree.insert(key);
//! }
//!
//! let keys: Vec<_> = tree.pre_order().copied().collect();
//! assert_eq!(keys, [30, 20, 10, 25, 40, 50]);
//! assert_eq!(tree.height(), 3);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

/// A (possibly empty) AVL subtree. The whole tree is just the subtree at the root.
pub enum Tree<K> {
    /// The empty subtree. Its height is 0.
    Leaf,
    /// A subtree rooted at a [`Node`].
    Node(Box<Node<K>>),
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> Clone for Tree<K> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => Self::Node(Box::new(Node {
                key: n.key.clone(),
                left: n.left.clone(),
                right: n.right.clone(),
                height: n.height,
            })),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => f.write_str("Leaf"),
            Self::Node(n) => fmt::Debug::fmt(n, f),
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Returns a new subtree root containing everything in `self` plus `key`.
    ///
    /// The returned subtree satisfies the AVL invariant at every node. Keys
    /// equal to an existing key are inserted again, into the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ds_classics::avl::Tree;
    ///
    /// let tree = Tree::new().insert(1).insert(2).insert(3);
    ///
    /// // Ascending inserts rotate 2 up to the root.
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(2));
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(self, key: K) -> Self
    where
        K: Ord,
    {
        match self {
            Self::Leaf => Self::Node(Node::new_boxed(key)),
            Self::Node(n) => Self::Node(n.insert(key)),
        }
    }

    /// Returns `true` if some node in the tree has a key equal to `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self;
        while let Self::Node(n) = current {
            current = match key.cmp(&n.key) {
                Ordering::Less => &n.left,
                Ordering::Equal => return true,
                Ordering::Greater => &n.right,
            };
        }
        false
    }

    /// The root node of this subtree, or `None` for an empty subtree.
    pub fn root(&self) -> Option<&Node<K>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(&**n),
        }
    }

    /// Gets the height of this tree. An empty tree has height 0.
    pub fn height(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => n.height,
        }
    }

    /// Height of the left subtree minus height of the right subtree, 0 when empty.
    pub fn balance_factor(&self) -> isize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => n.balance_factor(),
        }
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Number of keys in the tree, counting every duplicate. Counts by walking the whole tree.
    pub fn len(&self) -> usize {
        self.pre_order().count()
    }

    /// Iterates the keys in root, left subtree, right subtree order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ds_classics::avl::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(3);
    /// assert_eq!(tree.pre_order().collect::<Vec<_>>(), [&2, &1, &3]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Iterates the keys in ascending (non-decreasing) order.
    pub fn in_order(&self) -> InOrder<'_, K> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self);
        iter
    }

    /// Panics if any node breaks the ordering, cached height, or AVL balance invariants.
    ///
    /// With duplicate keys a rotation can lift an equal key above its twin, so ordering is
    /// checked as `left <= node <= right`.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self)
    where
        K: Ord,
    {
        fn check<K: Ord>(tree: &Tree<K>) -> usize {
            let Tree::Node(n) = tree else {
                return 0;
            };
            let left_height = check(&n.left);
            let right_height = check(&n.right);
            if let Some(left) = n.left.root() {
                assert!(left.key <= n.key);
            }
            if let Some(right) = n.right.root() {
                assert!(right.key >= n.key);
            }
            assert_eq!(n.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
            n.height
        }

        check(self);
        assert!(self
            .in_order()
            .zip(self.in_order().skip(1))
            .all(|(a, b)| a <= b));
    }

    fn into_node(self) -> Option<Box<Node<K>>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n),
        }
    }
}

/// Which child an insertion descended into. Ties go right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn of<K: Ord>(key: &K, pivot: &K) -> Self {
        if key < pivot {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// A `Node` holds a key and always has two children, although those children may be
/// [`Leaf`][Tree::Leaf]s.
pub struct Node<K> {
    key: K,
    left: Tree<K>,
    right: Tree<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: Tree::Leaf,
            right: Tree::Leaf,
            height: 1,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The left subtree. Its keys sort before (or, after rotations over duplicates, equal to)
    /// this node's key.
    pub fn left(&self) -> &Tree<K> {
        &self.left
    }

    /// The right subtree. Its keys sort at or after this node's key.
    pub fn right(&self) -> &Tree<K> {
        &self.right
    }

    /// The cached height of the subtree rooted here, at least 1.
    pub fn height(&self) -> usize {
        self.height
    }

    fn balance_factor(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = self.left.height().max(self.right.height()) + 1;
    }

    fn insert(mut self: Box<Self>, key: K) -> Box<Self>
    where
        K: Ord,
    {
        let side = Side::of(&key, &self.key);
        let child = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        // The key moves into the subtree below, so record now which way it will go at the
        // child. A child that rotates during the insert keeps its old height, so whenever the
        // rebalance below needs this, the child's key is the one compared here.
        let child_side = child.root().map(|c| Side::of(&key, &c.key));
        *child = mem::take(child).insert(key);

        self.fix_height();
        self.rebalance(side, child_side)
    }

    /// Restores the AVL invariant after an insert that went down `side`, then `child_side`.
    fn rebalance(mut self: Box<Self>, side: Side, child_side: Option<Side>) -> Box<Self> {
        // See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
        let balance = self.balance_factor();
        let new_root = match (side, child_side) {
            // Left-Left
            (Side::Left, Some(Side::Left)) if balance > 1 => self.rotate_right(),
            // Right-Right
            (Side::Right, Some(Side::Right)) if balance < -1 => self.rotate_left(),
            // Left-Right
            (Side::Left, Some(Side::Right)) if balance > 1 => {
                let left = mem::take(&mut self.left)
                    .into_node()
                    .expect("Left-heavy node has a left child");
                self.left = Tree::Node(left.rotate_left());
                self.rotate_right()
            }
            // Right-Left
            (Side::Right, Some(Side::Left)) if balance < -1 => {
                let right = mem::take(&mut self.right)
                    .into_node()
                    .expect("Right-heavy node has a right child");
                self.right = Tree::Node(right.rotate_right());
                self.rotate_left()
            }
            _ => self,
        };

        if cfg!(debug_assertions) {
            let left_height = new_root.left.height();
            let right_height = new_root.right.height();
            assert_eq!(new_root.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        new_root
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Must only be called when there _is_ a left child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///        y                 x
    ///       / \               / \
    ///      x   c   rotate -> a   y
    ///     / \                   / \
    ///    a   t2                t2  c
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = mem::take(&mut self.left)
            .into_node()
            .expect("Rotate right => left child");

        self.left = mem::take(&mut new_root.right);
        self.fix_height();

        new_root.right = Tree::Node(self);
        new_root.fix_height();
        new_root
    }

    /// Mirror image of [`Node::rotate_right`]: moves the right child up.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = mem::take(&mut self.right)
            .into_node()
            .expect("Rotate left => right child");

        self.right = mem::take(&mut new_root.left);
        self.fix_height();

        new_root.left = Tree::Node(self);
        new_root.fix_height();
        new_root
    }
}

/// Lazy pre-order iterator over the keys of a [`Tree`]. Created by [`Tree::pre_order`].
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is visited first.
        self.stack.extend(node.right.root());
        self.stack.extend(node.left.root());
        Some(&node.key)
    }
}

/// Lazy in-order iterator over the keys of a [`Tree`]. Created by [`Tree::in_order`].
pub struct InOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    fn push_left_spine(&mut self, mut tree: &'a Tree<K>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = &n.left;
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.key)
    }
}
