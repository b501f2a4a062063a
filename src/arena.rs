//! An arena-backed BST. Nodes live in a [`generational_arena::Arena`] and refer to their
//! children by [`Index`] rather than by pointer. Each index is held by exactly one parent (or by
//! the tree, for the root). Slots freed by [`Tree::remove`] and [`Tree::clear`] go back to the
//! arena's free list and are handed out again by later inserts.
//!
//! Every recursive helper takes the root of a subtree and returns the (possibly new) root of
//! that subtree, which the caller stores back into the parent's child slot.
//!
//! # Examples
//!
//! ```
//! use bst::arena::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(x);
//! }
//!
//! // 30 has two children so its in-order successor, 40, takes its place.
//! assert_eq!(tree.remove(&30), Some(30));
//! assert_eq!(tree.find(&30), None);
//! assert_eq!(tree.traverse_inorder(), vec![&20, &40, &50, &60, &70, &80]);
//!
//! tree.clear();
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::mem;

use generational_arena::{Arena, Index};
use tracing::{debug, trace};

/// A Binary Search Tree of distinct values stored in an arena. Supports the same operations as
/// [`crate::boxed::Tree`].
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Index>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.traverse_inorder()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf, 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.height_at(self.root)
    }

    /// Potentially finds the stored value equal to `target`. If no node holds it, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.find(&"b"), None);
    ///
    /// tree.insert("b");
    /// assert_eq!(tree.find(&"b"), Some(&"b"));
    /// assert_eq!(tree.find(&"z"), None);
    /// ```
    pub fn find(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.find_at(self.root, target)
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
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let len = self.nodes.len();
        let root = self.root;
        self.root = Some(self.insert_at(root, value));
        self.nodes.len() > len
    }

    /// Removes the value equal to `target` from the tree and returns it. If the tree does not
    /// contain such a value, nothing happens.
    pub fn remove(&mut self, target: &T) -> Option<T>
    where
        T: Ord,
    {
        let root = self.root;
        let (root, removed) = self.remove_at(root, target);
        self.root = root;
        removed
    }

    /// Calls `f` on every value in ascending order.
    pub fn for_each_inorder<'a>(&'a self, mut f: impl FnMut(&'a T)) {
        self.for_each_inorder_at(self.root, &mut f);
    }

    /// Collects a fresh in-order traversal. The values come out in strictly ascending order.
    pub fn traverse_inorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.for_each_inorder(|value| values.push(value));
        values
    }

    /// Writes every value in ascending order to `out`, one per line.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for word in ["kiwi", "apple", "mango"] {
    ///     tree.insert(word);
    /// }
    ///
    /// let mut out = Vec::new();
    /// tree.write_inorder(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "apple\nkiwi\nmango\n");
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

    /// Releases every node in post order and empties the tree. The arena keeps its slots for
    /// reuse. Clearing an empty tree does nothing.
    pub fn clear(&mut self) {
        let released = self
            .root
            .take()
            .map_or(0, |root| self.release_subtree(root));
        if released > 0 {
            debug!(released, "cleared tree");
        }
    }

    fn node(&self, index: Index) -> &Node<T> {
        self.nodes
            .get(index)
            .expect("Linked index must point at a live node")
    }

    fn node_mut(&mut self, index: Index) -> &mut Node<T> {
        self.nodes
            .get_mut(index)
            .expect("Linked index must point at a live node")
    }

    /// Frees the slot at `index` and hands back the value it held. The caller must already have
    /// unlinked it from its parent.
    fn release(&mut self, index: Index) -> T {
        self.nodes
            .remove(index)
            .expect("Released index must point at a live node")
            .value
    }

    fn height_at(&self, at: Option<Index>) -> usize {
        at.map_or(0, |index| {
            let node = self.node(index);
            1 + self.height_at(node.left).max(self.height_at(node.right))
        })
    }

    fn find_at(&self, at: Option<Index>, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        let node = self.node(at?);
        match target.cmp(&node.value) {
            Ordering::Less => self.find_at(node.left, target),
            Ordering::Equal => Some(&node.value),
            Ordering::Greater => self.find_at(node.right, target),
        }
    }

    /// Inserts `value` into the subtree rooted at `at` and returns the subtree's root, which is
    /// a freshly allocated leaf when `at` is empty.
    fn insert_at(&mut self, at: Option<Index>, value: T) -> Index
    where
        T: Ord,
    {
        let Some(index) = at else {
            return self.nodes.insert(Node::new(value));
        };

        let node = self.node(index);
        match value.cmp(&node.value) {
            Ordering::Less => {
                let left = node.left;
                let new_left = self.insert_at(left, value);
                self.node_mut(index).left = Some(new_left);
            }
            Ordering::Equal => {}
            Ordering::Greater => {
                let right = node.right;
                let new_right = self.insert_at(right, value);
                self.node_mut(index).right = Some(new_right);
            }
        }

        if cfg!(debug_assertions) {
            let node = self.node(index);
            if let Some(left) = node.left {
                assert!(self.node(left).value < node.value);
            }
            if let Some(right) = node.right {
                assert!(node.value < self.node(right).value);
            }
        }
        index
    }

    /// Removes `target` from the subtree rooted at `at`. Returns the subtree's new root along
    /// with the removed value, if there was one.
    fn remove_at(&mut self, at: Option<Index>, target: &T) -> (Option<Index>, Option<T>)
    where
        T: Ord,
    {
        let Some(index) = at else {
            return (None, None);
        };

        let node = self.node(index);
        match target.cmp(&node.value) {
            Ordering::Less => {
                let left = node.left;
                let (new_left, removed) = self.remove_at(left, target);
                self.node_mut(index).left = new_left;
                (Some(index), removed)
            }
            Ordering::Greater => {
                let right = node.right;
                let (new_right, removed) = self.remove_at(right, target);
                self.node_mut(index).right = new_right;
                (Some(index), removed)
            }
            Ordering::Equal => match (node.left, node.right) {
                (Some(_), Some(right)) => {
                    let (new_right, successor) = self.remove_min(right);
                    trace!("replaced two-child node with its in-order successor");

                    let node = self.node_mut(index);
                    node.right = new_right;
                    (Some(index), Some(mem::replace(&mut node.value, successor)))
                }
                (child, None) | (None, child) => (child, Some(self.release(index))),
            },
        }
    }

    /// Detaches the smallest node of the subtree rooted at `index`. Returns the subtree's new
    /// root and the detached value.
    fn remove_min(&mut self, index: Index) -> (Option<Index>, T) {
        let node = self.node(index);
        match node.left {
            Some(left) => {
                let (new_left, min) = self.remove_min(left);
                self.node_mut(index).left = new_left;
                (Some(index), min)
            }
            None => {
                let right = node.right;
                (right, self.release(index))
            }
        }
    }

    fn for_each_inorder_at<'a, F>(&'a self, at: Option<Index>, f: &mut F)
    where
        F: FnMut(&'a T),
    {
        if let Some(index) = at {
            let node = self.node(index);
            self.for_each_inorder_at(node.left, f);
            f(&node.value);
            self.for_each_inorder_at(node.right, f);
        }
    }

    /// Frees the subtree rooted at `index`, children before parents, and returns how many slots
    /// were released.
    fn release_subtree(&mut self, index: Index) -> usize {
        let node = self.node(index);
        let (left, right) = (node.left, node.right);

        let released = left.map_or(0, |left| self.release_subtree(left))
            + right.map_or(0, |right| self.release_subtree(right));
        self.release(index);
        released + 1
    }
}

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    left: Option<Index>,
    right: Option<Index>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}
