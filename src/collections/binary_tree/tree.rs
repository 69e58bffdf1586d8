use std::fmt::{self, Debug, Display, Formatter};

use super::node::Branch;

/// An unbalanced binary search tree of distinct values, ordered by [`Ord`].
///
/// Every node owns its children outright ([`Box`]ed), so the borrow checker enforces the tree
/// shape and no unsafe code is involved. Inserting an already-present value is a silent no-op,
/// which makes the tree a set: `len` counts distinct values.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the BinarySearchTree.
/// - `h`: The height of the tree, which is `O(log n)` when insertions arrive in a shuffled order
///   but degrades to `O(n)` for sorted input, as no rebalancing is performed.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `find/contains` | `O(h)` |
///
/// # Examples
/// ```
/// # use classic_collections::collections::binary_tree::BinarySearchTree;
/// let mut tree = BinarySearchTree::new(6);
/// tree.insert(5);
/// tree.insert(7);
/// tree.insert(9);
/// assert_eq!(tree.find(&9), Some(&9));
/// assert_eq!(tree.find(&17), None);
/// ```
pub struct BinarySearchTree<T: Ord> {
    root: Branch<T>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates a new BinarySearchTree rooted at the provided value.
    pub fn new(value: T) -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch::leaf(value),
            len: 1,
        }
    }

    /// Creates a new BinarySearchTree with no values.
    pub const fn empty() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch::empty(),
            len: 0,
        }
    }

    /// Returns the number of distinct values in the BinarySearchTree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the BinarySearchTree contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds the provided value to the tree, at the position its ordering dictates. Returns true
    /// if the value was absent and has been added, or false if an equal value was already
    /// present, in which case the tree is unchanged.
    pub fn insert(&mut self, value: T) -> bool {
        let added = self.root.insert(value);
        if added {
            self.len += 1;
        }
        added
    }

    /// Returns a reference to the stored value equal to the provided one, if present.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.root.get(value)
    }

    /// Returns true if a value equal to the provided one is present.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::empty();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<T: Ord> Eq for BinarySearchTree<T> {}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BinarySearchTree ")?;
        let mut list = f.debug_list();
        self.root.entries(&mut list);
        list.finish()
    }
}

impl<T: Ord + Debug> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.root.entries(&mut list);
        list.finish()
    }
}
