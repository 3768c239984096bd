//! This crate exposes an unbalanced Binary Search Tree (BST) in two flavors,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search for, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element and
//! has up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because elements that compare equal are the same key, inserting one twice
//! stores it once.
//!
//! The trees here never rebalance. Searching takes `O(height)`, which is
//! `O(lg N)` when elements arrive in a shuffled order but degrades to `O(N)`
//! when they arrive sorted and the tree collapses into a chain.
//!
//! BSTs naturally support sorted traversal by visiting the left subtree, then
//! the subtree root, then the right subtree. See [`Order`] for the three
//! depth-first orders both trees support.
//!
//! ## Flavors
//!
//! - [`recursive::Tree`] rebuilds the path to every change with recursive
//!   helpers that hand the new subtree root back to the parent.
//! - [`iterative::Tree`] walks `&mut` links and explicit stacks instead, so no
//!   operation (including `Drop`) is limited by the call stack.
//!
//! # Examples
//!
//! ```
//! use bst::recursive::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.pre_order(), [&50, &30, &20, &40, &70, &60, &80]);
//! assert_eq!(tree.in_order(), [&20, &30, &40, &50, &60, &70, &80]);
//! assert_eq!(tree.post_order(), [&20, &40, &30, &60, &80, &70, &50]);
//!
//! assert!(tree.search(&40));
//! assert!(!tree.search(&90));
//!
//! tree.delete(&20);
//! assert_eq!(tree.in_order(), [&30, &40, &50, &60, &70, &80]);
//!
//! // 50 has two children so its in-order successor, 60, takes its place.
//! tree.delete(&50);
//! assert_eq!(tree.in_order(), [&30, &40, &60, &70, &80]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iterative;
mod node;
mod order;
pub mod recursive;

#[cfg(test)]
mod test;

pub use order::Order;
