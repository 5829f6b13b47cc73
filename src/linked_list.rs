//! A doubly linked list whose `next` links own the following node and whose `prev` links are
//! non-owning back-references.
//!
//! Only a head pointer is kept, so [`DoublyLinkedList::append`] and
//! [`DoublyLinkedList::iter_back`] walk the whole list first. Nodes are handed out as
//! [`NodeRef`]s, which is what [`DoublyLinkedList::delete`] takes to unlink a node in O(1).
//!
//! # Examples
//!
//! ```
//! use ds_classics::linked_list::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! let ten = list.append(10);
//! list.append(20);
//! list.prepend(5);
//!
//! assert_eq!(list.iter().collect::<Vec<_>>(), [5, 10, 20]);
//! assert_eq!(list.iter_back().collect::<Vec<_>>(), [20, 10, 5]);
//!
//! list.delete(Some(&ten));
//! assert_eq!(list.to_string(), "5 <-> 20");
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

type Link<T> = Option<Rc<RefCell<Node<T>>>>;

struct Node<T> {
    value: T,
    prev: Weak<RefCell<Node<T>>>,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new_shared(value: T) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            value,
            prev: Weak::new(),
            next: None,
        }))
    }
}

/// A handle to one node of a [`DoublyLinkedList`].
///
/// Holding a handle keeps the node alive, but not its neighbours, and does not keep it in the
/// list: once the node is deleted its `prev` and `next` are both empty.
pub struct NodeRef<T>(Rc<RefCell<Node<T>>>);

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for NodeRef<T> {
    /// Two handles are equal when they point at the same node.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for NodeRef<T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&*self.value()).finish()
    }
}

impl<T> NodeRef<T> {
    /// Borrows the value stored in this node.
    pub fn value(&self) -> Ref<'_, T> {
        Ref::map(self.0.borrow(), |node| &node.value)
    }

    /// The node after this one, if any.
    pub fn next(&self) -> Option<NodeRef<T>> {
        self.0.borrow().next.as_ref().map(|n| NodeRef(Rc::clone(n)))
    }

    /// The node before this one, if any.
    pub fn prev(&self) -> Option<NodeRef<T>> {
        self.0.borrow().prev.upgrade().map(NodeRef)
    }
}

/// A doubly linked list. See the [module documentation][self] for an overview.
pub struct DoublyLinkedList<T> {
    head: Link<T>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    // Unlink front to back so a long chain of `next` links is not dropped recursively.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            current = node.borrow_mut().next.take();
        }
    }
}

impl<T> DoublyLinkedList<T> {
    /// Generates a new, empty list.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Returns `true` if the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes by walking the list.
    pub fn len(&self) -> usize {
        let mut len = 0;
        let mut current = self.head.as_ref().map(Rc::clone);
        while let Some(node) = current {
            len += 1;
            current = node.borrow().next.as_ref().map(Rc::clone);
        }
        len
    }

    /// The first node of the list, if any.
    pub fn head(&self) -> Option<NodeRef<T>> {
        self.head.as_ref().map(|n| NodeRef(Rc::clone(n)))
    }

    /// The last node of the list, found by walking from the head.
    pub fn tail(&self) -> Option<NodeRef<T>> {
        self.tail_node().map(NodeRef)
    }

    /// Adds `value` after the current tail and returns a handle to its node.
    ///
    /// This walks the whole list: there is no tail pointer.
    pub fn append(&mut self, value: T) -> NodeRef<T> {
        let new_node = Node::new_shared(value);
        match self.tail_node() {
            None => self.head = Some(Rc::clone(&new_node)),
            Some(tail) => {
                new_node.borrow_mut().prev = Rc::downgrade(&tail);
                tail.borrow_mut().next = Some(Rc::clone(&new_node));
            }
        }
        NodeRef(new_node)
    }

    /// Makes `value` the new head in O(1) and returns a handle to its node.
    pub fn prepend(&mut self, value: T) -> NodeRef<T> {
        let new_node = Node::new_shared(value);
        if let Some(old_head) = self.head.take() {
            old_head.borrow_mut().prev = Rc::downgrade(&new_node);
            new_node.borrow_mut().next = Some(old_head);
        }
        self.head = Some(Rc::clone(&new_node));
        NodeRef(new_node)
    }

    /// Unlinks `node` from the list in O(1).
    ///
    /// Does nothing if the list is empty, `node` is `None`, or `node` was already deleted. The
    /// node is not searched for: passing a node from a different list is not detected and will
    /// relink that other list instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ds_classics::linked_list::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// let one = list.append(1);
    /// list.append(2);
    ///
    /// list.delete(Some(&one));
    /// list.delete(Some(&one));
    /// list.delete(None);
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [2]);
    /// assert!(one.next().is_none());
    /// ```
    pub fn delete(&mut self, node: Option<&NodeRef<T>>) {
        let Some(NodeRef(node)) = node else {
            return;
        };
        let Some(head) = self.head.as_ref() else {
            return;
        };

        if Rc::ptr_eq(head, node) {
            let next = node.borrow_mut().next.take();
            if let Some(next) = &next {
                next.borrow_mut().prev = Weak::new();
            }
            self.head = next;
            return;
        }

        let mut removed = node.borrow_mut();
        // Every linked node except the head has a live `prev`. Without one the node has
        // already been deleted.
        let Some(prev) = removed.prev.upgrade() else {
            return;
        };
        let next = removed.next.take();
        removed.prev = Weak::new();

        if let Some(next) = &next {
            next.borrow_mut().prev = Rc::downgrade(&prev);
        }
        prev.borrow_mut().next = next;
    }

    /// Iterates clones of the values from head to tail.
    ///
    /// The iterator borrows the list, so the list cannot change while it is being walked:
    ///
    /// ```compile_fail
    /// use ds_classics::linked_list::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.append(1);
    ///
    /// let mut iter = list.iter();
    /// list.append(2);
    /// iter.next();
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_ref().map(Rc::clone),
            _list: PhantomData,
        }
    }

    /// Iterates clones of the values from tail to head. Finding the tail walks the list first.
    ///
    /// Like [`DoublyLinkedList::iter`], this borrows the list for as long as it is used.
    pub fn iter_back(&self) -> IterBack<'_, T> {
        IterBack {
            next: self.tail_node(),
            _list: PhantomData,
        }
    }

    fn tail_node(&self) -> Link<T> {
        let mut current = Rc::clone(self.head.as_ref()?);
        loop {
            let next = current.borrow().next.as_ref().map(Rc::clone);
            match next {
                Some(next) => current = next,
                None => return Some(current),
            }
        }
    }

    /// Applies `f` to each value, head to tail, without cloning.
    fn for_each_value(&self, mut f: impl FnMut(&T, bool) -> fmt::Result) -> fmt::Result {
        let mut current = self.head.as_ref().map(Rc::clone);
        while let Some(node) = current {
            let node = node.borrow();
            f(&node.value, node.next.is_none())?;
            current = node.next.as_ref().map(Rc::clone);
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.for_each_value(|value, _| {
            list.entry(value);
            Ok(())
        })?;
        list.finish()
    }
}

/// Renders the values head to tail joined by `" <-> "`.
impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.for_each_value(|value, is_last| {
            if is_last {
                write!(f, "{value}")
            } else {
                write!(f, "{value} <-> ")
            }
        })
    }
}

/// Forward iterator over a [`DoublyLinkedList`]. Created by [`DoublyLinkedList::iter`].
pub struct Iter<'a, T> {
    next: Link<T>,
    _list: PhantomData<&'a DoublyLinkedList<T>>,
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        let node = node.borrow();
        self.next = node.next.as_ref().map(Rc::clone);
        Some(node.value.clone())
    }
}

/// Backward iterator over a [`DoublyLinkedList`]. Created by [`DoublyLinkedList::iter_back`].
pub struct IterBack<'a, T> {
    next: Link<T>,
    _list: PhantomData<&'a DoublyLinkedList<T>>,
}

impl<T: Clone> Iterator for IterBack<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        let node = node.borrow();
        self.next = node.prev.upgrade();
        Some(node.value.clone())
    }
}
