#![cfg(test)]

use std::cmp::Ordering;

use crate::collections::binary_tree::BinarySearchTree;
use crate::util::alloc::CountedDrop;

/// A value ordered by its key alone, so drop counting works on a type with no natural [`Ord`].
struct Keyed(u32, CountedDrop);

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[test]
fn rooted_construction() {
    let tree = BinarySearchTree::new(6);
    assert_eq!(tree.len(), 1, "A rooted tree should start with one value");
    assert_eq!(tree.find(&6), Some(&6), "The root value should be findable");
}

#[test]
fn insert_orders_by_comparison() {
    let mut tree = BinarySearchTree::new(6);
    assert!(tree.insert(5), "A new value should be added");
    assert!(tree.insert(7), "A new value should be added");
    assert!(tree.insert(9), "A new value should be added");

    assert_eq!(tree.len(), 4, "len should count every distinct value");
    assert_eq!(tree.find(&9), Some(&9), "Inserted values should be findable");
    assert_eq!(tree.find(&17), None, "Absent values should not be found");
}

#[test]
fn duplicates_are_ignored() {
    let mut tree = BinarySearchTree::new(6);
    tree.insert(5);

    assert!(!tree.insert(5), "An equal value should be rejected");
    assert_eq!(tree.len(), 2, "A rejected insert should not change len");
}

#[test]
fn empty_tree() {
    let mut tree = BinarySearchTree::empty();
    assert!(tree.is_empty(), "An empty tree should hold no values");
    assert_eq!(tree.find(&1), None, "Nothing should be findable in an empty tree");

    assert!(tree.insert(1), "The first value should become the root");
    assert_eq!(tree.find(&1), Some(&1), "The new root should be findable");
}

#[test]
fn contains() {
    let tree: BinarySearchTree<_> = [4, 2, 6, 1, 3].into_iter().collect();

    assert!(tree.contains(&3), "contains should find present values");
    assert!(!tree.contains(&5), "contains should reject absent values");
}

#[test]
fn finds_at_depth() {
    // Sorted input degenerates the tree into a chain; lookups still work.
    let tree: BinarySearchTree<_> = (0..64).collect();

    assert_eq!(tree.len(), 64, "Every distinct value should be counted");
    assert_eq!(tree.find(&63), Some(&63), "The deepest value should be findable");
    assert_eq!(tree.find(&64), None, "Absent values should not be found");
}

#[test]
fn equality_is_structural() {
    let a: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    let b: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    let c: BinarySearchTree<_> = [1, 2, 3].into_iter().collect();

    assert_eq!(a, b, "Identical insertion orders should build equal trees");
    assert_ne!(
        a, c,
        "The same values in a different shape should not compare equal"
    );
}

#[test]
fn drops_every_value() {
    let counter = CountedDrop::new(0);

    {
        let mut tree = BinarySearchTree::new(Keyed(3, counter.clone()));
        for key in [1, 4, 2] {
            tree.insert(Keyed(key, counter.clone()));
        }

        assert!(!tree.insert(Keyed(4, counter.clone())));
        assert_eq!(
            *counter.borrow(),
            1,
            "A rejected duplicate should be dropped immediately"
        );
    }

    assert_eq!(
        *counter.borrow(),
        5,
        "Dropping the tree should drop every stored value exactly once"
    );
}

#[test]
fn formatting_is_in_order() {
    let tree: BinarySearchTree<_> = [6, 5, 7, 9].into_iter().collect();

    assert_eq!(
        format!("{tree:?}"),
        "BinarySearchTree [5, 6, 7, 9]",
        "Debug should render the values in sorted order"
    );
    assert_eq!(
        format!("{tree}"),
        "[5, 6, 7, 9]",
        "Display should render the values in sorted order"
    );
}
