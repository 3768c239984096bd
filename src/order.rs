/// The depth-first order in which a traversal emits elements. Every order visits each element
/// exactly once; they only differ in when a node is emitted relative to its subtrees.
///
/// # Examples
///
/// ```
/// use bst::{iterative::Tree, Order};
///
/// let mut tree = Tree::new();
/// for x in [2, 1, 3] {
///     tree.insert(x);
/// }
///
/// assert_eq!(tree.traverse(Order::Pre), [&2, &1, &3]);
/// assert_eq!(tree.traverse(Order::In), [&1, &2, &3]);
/// assert_eq!(tree.traverse(Order::Post), [&1, &3, &2]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. This yields elements in
    /// ascending order.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

impl Order {
    /// All orders, in the order the tree methods are usually listed.
    pub const ALL: [Order; 3] = [Order::Pre, Order::In, Order::Post];
}
