use std::cmp::Ordering;
use std::fmt::{Debug, DebugList};

/// A child position in the tree, which may or may not hold a node. Wrapping the [`Option`] lets
/// the recursive operations live here, where an absent child is just the base case.
#[derive(PartialEq, Eq)]
pub(crate) struct Branch<T: Ord>(pub Option<Box<TreeNode<T>>>);

#[derive(PartialEq, Eq)]
pub(crate) struct TreeNode<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Branch<T> {
    pub const fn empty() -> Branch<T> {
        Branch(None)
    }

    pub fn leaf(value: T) -> Branch<T> {
        Branch(Some(Box::new(TreeNode {
            left: Branch::empty(),
            right: Branch::empty(),
            value,
        })))
    }

    /// Descends to the ordered position for `value` and attaches a leaf there. Returns false
    /// without modifying the tree when an equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        match &mut self.0 {
            None => {
                *self = Branch::leaf(value);
                true
            },
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                Ordering::Greater => node.right.insert(value),
                Ordering::Equal => false,
            },
        }
    }

    /// Descends by comparison until `value` is found or an empty branch proves its absence.
    pub fn get(&self, value: &T) -> Option<&T> {
        let node = self.0.as_ref()?;
        match value.cmp(&node.value) {
            Ordering::Less => node.left.get(value),
            Ordering::Greater => node.right.get(value),
            Ordering::Equal => Some(&node.value),
        }
    }
}

impl<T: Ord + Debug> Branch<T> {
    /// Appends this subtree's values to `list` in order: left, own value, right.
    pub fn entries(&self, list: &mut DebugList<'_, '_>) {
        if let Some(node) = &self.0 {
            node.left.entries(list);
            list.entry(&node.value);
            node.right.entries(list);
        }
    }
}
