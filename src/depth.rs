/// A plain binary tree node, free of any search or balance invariants.
///
/// Children are linked directly through the public fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode<T> {
    pub value: T,
    pub left: Option<Box<BinaryNode<T>>>,
    pub right: Option<Box<BinaryNode<T>>>,
}

impl<T> BinaryNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Check whether the leaves of the tree rooted at `root` lie at an equal
/// depth.
///
/// The check compares the length of the longest path on each side of the
/// root, and is lenient about small trees: whenever neither side of the
/// root holds more than one node, the tree passes — even when one side is
/// empty and the other is not.
///
/// An empty tree passes.
pub fn has_equal_leaf_depth<T>(root: Option<&BinaryNode<T>>) -> bool {
    let root = match root {
        Some(v) => v,
        None => return true,
    };

    let left = height(root.left.as_deref());
    let right = height(root.right.as_deref());

    left == right || (left <= 1 && right <= 1)
}

/// The number of nodes on the longest root-to-leaf path, 0 for an empty
/// subtree.
fn height<T>(node: Option<&BinaryNode<T>>) -> usize {
    node.map(|v| {
        1 + height(v.left.as_deref()).max(height(v.right.as_deref()))
    })
    .unwrap_or_default()
}
