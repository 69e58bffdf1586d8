#![cfg(test)]

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::collections::linked::SinglyLinkedList;
use crate::util::panic::assert_panics;
use crate::util::alloc::CountedDrop;
use crate::util::error::{
    AccessError, EmptyContainer, IndexOutOfRange, SearchError, ValueNotFound,
};

#[test]
fn push_and_pop_front() {
    let mut list = SinglyLinkedList::new();
    list.push_front(3);
    list.push_front(2);
    list.push_front(1);

    assert_eq!(list.len(), 3, "List should contain all pushed elements");
    assert_eq!(list.front(), Ok(&1), "Most recent push should be the front");

    assert_eq!(
        list.pop_front(),
        Ok(1),
        "Popping should return the front element"
    );
    assert_eq!(
        list.pop_front(),
        Ok(2),
        "Popping should return elements in front-first order"
    );
    assert_eq!(list.len(), 1, "Two pops should leave a single element");
    assert_eq!(list.front(), Ok(&3), "First push should now be the front");
}

#[test]
fn front_and_back() {
    let mut list = SinglyLinkedList::new();
    assert_eq!(
        list.front(),
        Err(EmptyContainer),
        "An empty list has no front"
    );
    assert_eq!(list.back(), Err(EmptyContainer), "An empty list has no back");

    list.push_back('a');
    assert_eq!(
        list.front(),
        list.back(),
        "A single element is both the front and the back"
    );

    list.push_back('b');
    assert_eq!(list.front(), Ok(&'a'), "Front should be unchanged");
    assert_eq!(list.back(), Ok(&'b'), "Back should follow push_back");
}

#[test]
fn pop_back_restores_tail() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();

    assert_eq!(list.pop_back(), Ok(3), "pop_back should return the tail");
    assert_eq!(
        list.back(),
        Ok(&2),
        "The previous element should become the new tail"
    );

    list.push_back(4);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        vec![1, 2, 4],
        "push_back after pop_back should append after the new tail"
    );
}

#[test]
fn pop_empties_list() {
    let mut list = SinglyLinkedList::new();
    list.push_back(1);

    assert_eq!(list.pop_back(), Ok(1), "Popping should return the element");
    assert!(list.is_empty(), "Popping the only element should empty the list");
    assert_eq!(
        list.pop_front(),
        Err(EmptyContainer),
        "Popping an empty list should fail"
    );
}

#[test]
fn find_at_walks_from_head() {
    let list: SinglyLinkedList<_> = [10, 11, 12].into_iter().collect();

    assert_eq!(list.find_at(0), Ok(&10), "Index 0 should be the front");
    assert_eq!(list.find_at(2), Ok(&12), "The last index should be the tail");
    assert_eq!(
        list.find_at(3),
        Err(AccessError::IndexOutOfRange(IndexOutOfRange {
            index: 3,
            len: 3
        })),
        "Indices at or past the length should fail"
    );
    assert_eq!(
        SinglyLinkedList::<i32>::new().find_at(0),
        Err(AccessError::EmptyContainer(EmptyContainer)),
        "An empty list should report emptiness rather than a bad index"
    );
}

#[test]
fn index_operator() {
    let list: SinglyLinkedList<_> = ['x', 'y'].into_iter().collect();
    assert_eq!(list[1], 'y', "Indexing should match find_at");
    assert_panics!({ list[2] }, "Indexing past the end should panic");
}

#[test]
fn erase_middle_relinks() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3, 4].into_iter().collect();

    assert_eq!(list.erase(1), Ok(2), "Erasing should return the element");
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        vec![1, 3, 4],
        "The predecessor should be relinked around the erased node"
    );
    assert_eq!(list.len(), 3, "Erasing should shorten the list");
}

#[test]
fn erase_ends() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();

    assert_eq!(list.erase(0), Ok(1), "Erasing index 0 should pop the front");
    assert_eq!(
        list.erase(1),
        Ok(3),
        "Erasing the last index should pop the back"
    );
    assert_eq!(
        list.back(),
        Ok(&2),
        "The tail reference should move when the tail is erased"
    );

    list.push_back(5);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        vec![2, 5],
        "push_back should append after the repaired tail"
    );
}

#[test]
fn erase_out_of_range() {
    let mut list: SinglyLinkedList<_> = [1].into_iter().collect();
    assert_eq!(
        list.erase(1),
        Err(AccessError::IndexOutOfRange(IndexOutOfRange {
            index: 1,
            len: 1
        })),
        "Erasing past the end should fail without changing the list"
    );
    assert_eq!(list.len(), 1, "A failed erase should leave the list intact");
}

#[test]
fn add_after_splices() {
    let mut list: SinglyLinkedList<_> = [1, 3].into_iter().collect();

    assert_eq!(list.add_after(&1, 2), Ok(()), "The key should be found");
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        vec![1, 2, 3],
        "The new element should sit directly after the key"
    );
}

#[test]
fn add_after_tail_updates_tail() {
    let mut list: SinglyLinkedList<_> = [1, 2].into_iter().collect();

    list.add_after(&2, 3).unwrap();
    assert_eq!(
        list.back(),
        Ok(&3),
        "Splicing after the tail should move the tail reference"
    );

    list.push_back(4);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        vec![1, 2, 3, 4],
        "push_back should append after the moved tail"
    );
}

#[test]
fn add_before_splices() {
    let mut list: SinglyLinkedList<_> = [1, 3].into_iter().collect();

    assert_eq!(list.add_before(&3, 2), Ok(()), "The key should be found");
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        vec![1, 2, 3],
        "The new element should sit directly before the key"
    );
}

#[test]
fn add_before_head() {
    let mut list: SinglyLinkedList<_> = [2, 3].into_iter().collect();

    list.add_before(&2, 1).unwrap();
    assert_eq!(
        list.front(),
        Ok(&1),
        "Splicing before the head should produce a new head"
    );
    assert_eq!(list.len(), 3, "Splicing should lengthen the list");
}

#[test]
fn add_errors() {
    let mut empty = SinglyLinkedList::new();
    assert_eq!(
        empty.add_after(&1, 2),
        Err(SearchError::EmptyContainer(EmptyContainer)),
        "Splicing into an empty list should fail"
    );

    let mut list: SinglyLinkedList<_> = [1, 2].into_iter().collect();
    assert_eq!(
        list.add_after(&9, 10),
        Err(SearchError::ValueNotFound(ValueNotFound)),
        "Splicing after a missing key should fail"
    );
    assert_eq!(
        list.add_before(&9, 10),
        Err(SearchError::ValueNotFound(ValueNotFound)),
        "Splicing before a missing key should fail"
    );
    assert_eq!(list.len(), 2, "Failed splices should leave the list intact");
}

#[test]
fn index_of_and_contains() {
    let list: SinglyLinkedList<_> = [4, 5, 5, 6].into_iter().collect();

    assert_eq!(
        list.index_of(&5),
        Some(1),
        "The first matching index should be returned"
    );
    assert_eq!(list.index_of(&7), None, "Missing values have no index");
    assert!(list.contains(&6), "contains should find present values");
    assert!(!list.contains(&7), "contains should reject missing values");
}

#[test]
fn iterators() {
    let list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();

    let mut iter = list.iter();
    assert_eq!(iter.len(), 3, "The iterator should know its length");
    assert_eq!(iter.next(), Some(&1), "Iteration should start at the head");

    let collected: Vec<_> = list.into_iter().collect();
    assert_eq!(
        collected,
        vec![1, 2, 3],
        "The owning iterator should yield elements from the front"
    );
}

#[test]
fn equality() {
    let a: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let b: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let c: SinglyLinkedList<_> = [1, 2, 4].into_iter().collect();

    assert_eq!(a, b, "Lists with equal elements should be equal");
    assert_ne!(a, c, "Lists with different elements should not be equal");
    assert_ne!(
        a,
        SinglyLinkedList::new(),
        "A full list should not equal an empty one"
    );
}

#[test]
fn equal_lists_hash_equally() {
    fn hash_of(list: &SinglyLinkedList<i32>) -> u64 {
        let mut hasher = DefaultHasher::new();
        list.hash(&mut hasher);
        hasher.finish()
    }

    let a: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let b: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let c: SinglyLinkedList<_> = [1, 2].into_iter().collect();

    assert_eq!(hash_of(&a), hash_of(&b), "Equal lists should produce equal hashes");
    assert_ne!(
        hash_of(&a),
        hash_of(&c),
        "A list and its proper prefix should produce different hashes"
    );
}

#[test]
fn drops_all_nodes() {
    let counter = CountedDrop::new(0);

    {
        let mut list = SinglyLinkedList::new();
        for _ in 0..5 {
            list.push_back(counter.clone());
        }
        let _ = list.pop_back();
        assert_eq!(
            *counter.borrow(),
            1,
            "Popped elements should drop when discarded"
        );
    }

    assert_eq!(
        *counter.borrow(),
        5,
        "Dropping the list should drop every remaining element"
    );
}

#[test]
fn display_format() {
    let list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(
        format!("{list}"),
        "(1) -> (2) -> (3)",
        "Display should render the chain of links"
    );
    assert_eq!(
        format!("{}", SinglyLinkedList::<i32>::new()),
        "",
        "An empty list should render as nothing"
    );
}
