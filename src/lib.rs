//! This crate exposes two owned Binary Search Trees (BSTs) over ordered values,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because of these invariants a value can be stored at most once: inserting a value
//! that is already present leaves the tree untouched.
//!
//! Searching for a value takes `O(height)` where `height` is the longest path from the
//! root `Node` to a leaf `Node`. Neither tree here rebalances itself so inserting values
//! in sorted order degrades the height to `N`. BSTs also naturally support sorted
//! traversal by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Ownership
//!
//! Every node is owned by exactly one parent (or by the tree, for the root). There are no
//! back-references and nothing is shared, so neither tree needs reference counting:
//!
//! - [`boxed::Tree`] links nodes through `Option<Box<Node>>` slots.
//! - [`arena::Tree`] keeps nodes in an arena and links them by index. Slots freed by
//!   removal are reused by later inserts.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod arena;
pub mod boxed;
