//! This crate exposes a plain, unbalanced Binary Search Tree (BST)
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, traverse, and delete stored values. BSTs are typically
//! defined recursively using the notion of a `Node`. A `Node` stores a
//! value and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! The tree here is deliberately *not* self-balancing: insertion order
//! determines its shape, so a monotonic insertion order degrades it to a
//! linked list with `O(N)` operations. The upside is that the structure and
//! the algorithms stay simple enough to read in one sitting.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod unbalanced;
