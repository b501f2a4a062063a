//! An owned BST. Every node lives in a `Box` held by exactly one parent slot (the root's slot
//! belongs to the `Tree`), so nodes are released exactly once when their slot is emptied.
//!
//! # Examples
//!
//! ```
//! use bst::boxed::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Inserting a value that is already present does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::mem;

use tracing::{debug, trace};

/// An empty slot or a boxed subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree of distinct values. This can be used for inserting, finding, and removing
/// values and for visiting them in ascending order. No rebalancing is performed.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a single node has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Sorted insertion builds a linked list.
    /// for x in 0..5 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// Potentially finds the stored value equal to `target`. If no node holds it, `None` is
    /// returned. The returned reference is a read-only view of the value inside the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.find(&1), None);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.root.as_deref().and_then(|n| n.find(target))
    }

    /// Whether a value equal to `target` is stored in the tree.
    pub fn contains(&self, target: &T) -> bool
    where
        T: Ord,
    {
        self.find(target).is_some()
    }

    /// Inserts `value` as a new leaf. Returns `false`, leaving the tree untouched, if an equal
    /// value is already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(50));
    /// assert!(!tree.insert(50));
    /// assert_eq!(tree.traverse_inorder(), vec![&50]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = Node::insert(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the value equal to `target` from the tree and returns it. If the tree does not
    /// contain such a value, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [50, 30, 70, 20, 40, 60, 80] {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.remove(&30), Some(30));
    /// assert_eq!(tree.remove(&30), None);
    /// assert_eq!(tree.traverse_inorder(), vec![&20, &40, &50, &60, &70, &80]);
    /// ```
    pub fn remove(&mut self, target: &T) -> Option<T>
    where
        T: Ord,
    {
        let removed = Node::remove(&mut self.root, target);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Calls `f` on every value in ascending order: left subtree, then the node, then the
    /// right subtree.
    pub fn for_each_inorder<'a>(&'a self, mut f: impl FnMut(&'a T)) {
        if let Some(root) = &self.root {
            root.for_each_inorder(&mut f);
        }
    }

    /// Collects a fresh in-order traversal. The values come out in strictly ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.traverse_inorder().is_empty());
    ///
    /// for x in [2, 3, 1] {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.traverse_inorder(), vec![&1, &2, &3]);
    /// ```
    pub fn traverse_inorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        self.for_each_inorder(|value| values.push(value));
        values
    }

    /// Writes every value in ascending order to `out`, one per line.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [2, 3, 1] {
    ///     tree.insert(x);
    /// }
    ///
    /// let mut out = Vec::new();
    /// tree.write_inorder(&mut out).unwrap();
    /// assert_eq!(out, b"1\n2\n3\n");
    /// ```
    pub fn write_inorder<W>(&self, mut out: W) -> io::Result<()>
    where
        W: io::Write,
        T: fmt::Display,
    {
        for value in self.traverse_inorder() {
            writeln!(out, "{value}")?;
        }
        Ok(())
    }

    /// Releases every node, children before their parents, leaving the tree empty. Clearing an
    /// empty tree does nothing.
    pub fn clear(&mut self) {
        let released = Node::release_subtree(self.root.take());
        self.len = 0;
        if released > 0 {
            debug!(released, "cleared tree");
        }
    }
}

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    fn height(link: &Link<T>) -> usize {
        link.as_ref().map_or(0, |n| {
            1 + Self::height(&n.left).max(Self::height(&n.right))
        })
    }

    fn find(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        match target.cmp(&self.value) {
            Ordering::Less => self.left.as_deref().and_then(|n| n.find(target)),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right.as_deref().and_then(|n| n.find(target)),
        }
    }

    /// Inserts `value` into the subtree hanging off `link`, filling the first empty slot on the
    /// search path. Returns `false` if an equal value was found instead.
    fn insert(link: &mut Link<T>, value: T) -> bool
    where
        T: Ord,
    {
        match link {
            None => {
                *link = Some(Self::new_boxed(value));
                true
            }
            Some(node) => {
                let inserted = match value.cmp(&node.value) {
                    Ordering::Less => Self::insert(&mut node.left, value),
                    Ordering::Equal => false,
                    Ordering::Greater => Self::insert(&mut node.right, value),
                };

                if cfg!(debug_assertions) {
                    if let Some(left) = &node.left {
                        assert!(left.value < node.value);
                    }
                    if let Some(right) = &node.right {
                        assert!(node.value < right.value);
                    }
                }
                inserted
            }
        }
    }

    /// Removes `target` from the subtree hanging off `link`.
    ///
    /// A node with at most one child is replaced in its slot by that child. A node with two
    /// children keeps its place but takes over the value of its in-order successor, which is
    /// detached from the right subtree.
    fn remove(link: &mut Link<T>, target: &T) -> Option<T>
    where
        T: Ord,
    {
        let node = link.as_mut()?;
        match target.cmp(&node.value) {
            Ordering::Less => Self::remove(&mut node.left, target),
            Ordering::Greater => Self::remove(&mut node.right, target),
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                let successor = Self::remove_min(&mut node.right)?;
                trace!("replaced two-child node with its in-order successor");
                Some(mem::replace(&mut node.value, successor))
            }
            Ordering::Equal => {
                let Node { value, left, right } = *link.take()?;
                *link = left.or(right);
                Some(value)
            }
        }
    }

    /// Detaches the smallest node of the subtree hanging off `link` and returns its value. Its
    /// right child, if any, takes over the slot.
    fn remove_min(link: &mut Link<T>) -> Option<T> {
        let node = link.as_mut()?;
        if node.left.is_some() {
            return Self::remove_min(&mut node.left);
        }

        let Node { value, right, .. } = *link.take()?;
        *link = right;
        Some(value)
    }

    fn for_each_inorder<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a T),
    {
        if let Some(left) = &self.left {
            left.for_each_inorder(f);
        }
        f(&self.value);
        if let Some(right) = &self.right {
            right.for_each_inorder(f);
        }
    }

    /// Drops the subtree in post order and returns how many nodes it held.
    fn release_subtree(link: Link<T>) -> usize {
        let Some(mut node) = link else {
            return 0;
        };
        let released =
            Self::release_subtree(node.left.take()) + Self::release_subtree(node.right.take());
        drop(node);
        released + 1
    }
}
