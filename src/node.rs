/// An optional, owned pointer to a subtree. `None` marks the empty slot at the bottom of a
/// subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds one element and two children, either of which may be empty. Each `Node` is
/// owned by exactly one parent `Node` (or by the tree, for the root).
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new boxed leaf `Node` holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Returns the smallest element in the subtree rooted at this node by following left
    /// children until there are none.
    pub(crate) fn min_value(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }

        &node.value
    }

    /// Returns the largest element in the subtree rooted at this node.
    pub(crate) fn max_value(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }

        &node.value
    }
}
