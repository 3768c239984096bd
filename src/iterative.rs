//! An iterative, unbalanced BST. It behaves exactly like [`crate::recursive::Tree`] but never
//! recurses: mutations walk a cursor over `&mut` child links down to the slot they change and
//! traversals keep their own stack on the heap. That includes `Drop`, so even a tree that has
//! degenerated into a very long chain can be built, walked, and freed.
//!
//! # Examples
//!
//! ```
//! use bst::iterative::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Sorted input gives a chain as tall as the tree is long.
//! for x in 0..10_000 {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.height(), 10_000);
//! assert_eq!(tree.in_order().len(), 10_000);
//!
//! tree.delete(&0);
//! assert_eq!(tree.min(), Some(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::node::{Link, Node};
use crate::Order;

/// An unbalanced Binary Search Tree whose operations use loops and explicit stacks. This can be
/// used for inserting, searching for, and deleting elements, and for listing them in any
/// depth-first [`Order`].
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Detach every child before its parent is freed so no `Box` drops a subtree.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        {
            // Each entry pairs a node to copy with the empty slot its copy goes into.
            let mut stack: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
            if let Some(root) = self.root.as_deref() {
                stack.push((root, &mut tree.root));
            }
            while let Some((source, slot)) = stack.pop() {
                let copy = slot.insert(Node::new_boxed(source.value.clone()));
                let Node { left, right, .. } = &mut **copy;
                if let Some(source_left) = source.left.as_deref() {
                    stack.push((source_left, left));
                }
                if let Some(source_right) = source.right.as_deref() {
                    stack.push((source_right, right));
                }
            }
        }

        tree
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

/// One pending step of a traversal.
enum Step<'a, T> {
    /// Expand this subtree into further steps.
    Visit(&'a Node<T>),
    /// Emit this element.
    Emit(&'a T),
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Adds `value` to the tree. If an element comparing equal to `value` is already present
    /// the tree is left unchanged and `value` is dropped.
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return,
            };
        }

        *link = Some(Node::new_boxed(value));
    }

    /// Returns whether an element comparing equal to `value` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("b");
    ///
    /// assert!(tree.search(&"b"));
    /// assert!(!tree.search(&"a"));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }

        false
    }

    /// Removes the element comparing equal to `value`, if there is one. Deleting an element
    /// that isn't in the tree does nothing.
    ///
    /// A node with two children is replaced by its in-order successor: the smallest element
    /// of its right subtree.
    pub fn delete(&mut self, value: &T)
    where
        T: Ord,
    {
        // Compare through a shared borrow so `link` is only borrowed mutably when it moves.
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => return,
            };
            if ordering == Ordering::Equal {
                break;
            }
            if let Some(node) = link {
                link = match ordering {
                    Ordering::Less => &mut node.left,
                    _ => &mut node.right,
                };
            }
        }

        if let Some(node) = link.take() {
            *link = remove(node);
        }
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
        let mut stack: Vec<Step<'_, T>> =
            self.root.as_deref().map(Step::Visit).into_iter().collect();

        while let Some(step) = stack.pop() {
            let node = match step {
                Step::Emit(value) => {
                    out.push(value);
                    continue;
                }
                Step::Visit(node) => node,
            };

            // The stack is last in, first out so push the steps in reverse.
            let left = node.left.as_deref().map(Step::Visit);
            let right = node.right.as_deref().map(Step::Visit);
            let emit = Some(Step::Emit(&node.value));
            let steps = match order {
                Order::Pre => [right, left, emit],
                Order::In => [right, emit, left],
                Order::Post => [emit, right, left],
            };
            stack.extend(steps.into_iter().flatten());
        }

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
        let mut len = 0;
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            len += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }

        len
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the number of levels in the tree. An empty tree has a height of 0 and a single node
    /// has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        height
    }
}

/// Removes `node` from its subtree and returns what should take its place.
fn remove<T>(mut node: Box<Node<T>>) -> Link<T> {
    match (node.left.take(), node.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (left, Some(right)) => {
            let mut right = Some(right);
            let successor = take_min(&mut right)?;
            node.value = successor;
            node.left = left;
            node.right = right;
            Some(node)
        }
    }
}

/// Detaches the smallest node below `link` and returns its element, splicing the node's right
/// child into its slot. Returns `None` for an empty `link`.
fn take_min<T>(link: &mut Link<T>) -> Option<T> {
    let mut link = link;
    while link.as_deref().is_some_and(|node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }

    let node = link.take()?;
    let Node { value, right, .. } = *node;
    *link = right;
    Some(value)
}
