//! A recursive, unbalanced BST. Every operation is a thin entry point around a recursive helper
//! that works on one subtree at a time. Helpers that change the shape of the tree take the
//! subtree by value and hand its (possibly new) root back so the parent can store it again.
//!
//! # Examples
//!
//! ```
//! use bst::recursive::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! tree.insert(2);
//! tree.insert(1);
//! assert!(tree.search(&1));
//!
//! // Inserting an element that is already present does nothing.
//! tree.insert(1);
//! assert_eq!(tree.in_order(), [&1, &2]);
//!
//! // Neither does deleting an element that isn't.
//! tree.delete(&42);
//! tree.delete(&1);
//! assert_eq!(tree.in_order(), [&2]);
//! ```
//!
//! # Stack usage
//!
//! Recursion depth is the height of the tree. Inserting elements in sorted order produces a
//! tree whose height is its length, so very large sorted inputs can exhaust the call stack.
//! Use [`crate::iterative::Tree`] when that matters.

use std::cmp::Ordering;
use std::fmt;

use crate::node::{Link, Node};
use crate::Order;

/// An unbalanced Binary Search Tree built from recursive helpers. This can be used for
/// inserting, searching for, and deleting elements, and for listing them in any depth-first
/// [`Order`].
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Adds `value` to the tree. If an element comparing equal to `value` is already present
    /// the tree is left unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        self.root = Some(insert(self.root.take(), value));
    }

    /// Returns whether an element comparing equal to `value` is in the tree.
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        search(self.root.as_deref(), value)
    }

    /// Removes the element comparing equal to `value`, if there is one. Deleting an element
    /// that isn't in the tree does nothing.
    ///
    /// A node with two children is replaced by its in-order successor: the smallest element
    /// of its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [2, 1, 3] {
    ///     tree.insert(x);
    /// }
    /// tree.delete(&2);
    ///
    /// assert_eq!(tree.pre_order(), [&3, &1]);
    /// ```
    pub fn delete(&mut self, value: &T)
    where
        T: Ord,
    {
        self.root = delete(self.root.take(), value);
    }

    /// Lists the elements in pre-order: each node before its left and then right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        self.traverse(Order::Pre)
    }

    /// Lists the elements in-order, which is ascending.
    pub fn in_order(&self) -> Vec<&T> {
        self.traverse(Order::In)
    }

    /// Lists the elements in post-order: each node after its left and then right subtree.
    pub fn post_order(&self) -> Vec<&T> {
        self.traverse(Order::Post)
    }

    /// Lists every element in the given depth-first `order`. The result is a snapshot; the
    /// tree can't change while it is borrowed.
    pub fn traverse(&self, order: Order) -> Vec<&T> {
        let mut out = Vec::new();
        walk(self.root.as_deref(), order, &mut out);
        out
    }

    /// Returns the smallest element, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(Node::min_value)
    }

    /// Returns the largest element, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        self.root.as_deref().map(Node::max_value)
    }

    /// Counts the elements. This walks the whole tree.
    pub fn len(&self) -> usize {
        count(self.root.as_deref())
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the number of levels in the tree. An empty tree has a height of 0 and a single node
    /// has a height of 1.
    pub fn height(&self) -> usize {
        height(self.root.as_deref())
    }
}

/// Returns the root of `link` after adding `value` below it.
fn insert<T: Ord>(link: Link<T>, value: T) -> Box<Node<T>> {
    match link {
        None => Node::new_boxed(value),
        Some(mut node) => {
            match value.cmp(&node.value) {
                Ordering::Less => node.left = Some(insert(node.left.take(), value)),
                Ordering::Greater => node.right = Some(insert(node.right.take(), value)),
                Ordering::Equal => {}
            }
            node
        }
    }
}

fn search<T: Ord>(node: Option<&Node<T>>, value: &T) -> bool {
    match node {
        None => false,
        Some(n) => match value.cmp(&n.value) {
            Ordering::Less => search(n.left.as_deref(), value),
            Ordering::Equal => true,
            Ordering::Greater => search(n.right.as_deref(), value),
        },
    }
}

/// Returns the root of `link` after removing `value` from it.
fn delete<T: Ord>(link: Link<T>, value: &T) -> Link<T> {
    let mut node = link?;
    match value.cmp(&node.value) {
        Ordering::Less => {
            node.left = delete(node.left.take(), value);
            Some(node)
        }
        Ordering::Greater => {
            node.right = delete(node.right.take(), value);
            Some(node)
        }
        Ordering::Equal => remove(node),
    }
}

/// Removes `node` from its subtree and returns what should take its place.
fn remove<T>(mut node: Box<Node<T>>) -> Link<T> {
    match (node.left.take(), node.right.take()) {
        // Covers leaves too: the right child is then also `None`.
        (None, right) => right,
        (left, None) => left,
        (left, Some(right)) => {
            let (successor, right) = take_min(right);
            node.value = successor;
            node.left = left;
            node.right = right;
            Some(node)
        }
    }
}

/// Detaches the smallest element of the subtree rooted at `node`. Returns that element and the
/// subtree without it. The smallest node has no left child so its right child takes its place.
fn take_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (min, left) = take_min(left);
            node.left = left;
            (min, Some(node))
        }
    }
}

fn walk<'a, T>(node: Option<&'a Node<T>>, order: Order, out: &mut Vec<&'a T>) {
    if let Some(n) = node {
        if order == Order::Pre {
            out.push(&n.value);
        }
        walk(n.left.as_deref(), order, out);
        if order == Order::In {
            out.push(&n.value);
        }
        walk(n.right.as_deref(), order, out);
        if order == Order::Post {
            out.push(&n.value);
        }
    }
}

fn count<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, |n| 1 + count(n.left.as_deref()) + count(n.right.as_deref()))
}

fn height<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, |n| 1 + height(n.left.as_deref()).max(height(n.right.as_deref())))
}
