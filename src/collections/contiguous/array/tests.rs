#![cfg(test)]

use std::mem::MaybeUninit;
use std::ptr::NonNull;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};

#[test]
fn test_zst_support() {
    let arr = Array::from_iter_sized([ZeroSizedType; 5].into_iter());
    assert_eq!(
        arr[0], ZeroSizedType,
        "Indexing with no offset should work."
    );
    assert_eq!(
        arr[4], ZeroSizedType,
        "Indexing with an in-bounds offset should work."
    );
    assert_eq!(
        arr.iter().count(),
        5,
        "Should iterate over the right number of ZST instances."
    );

    assert_eq!(
        arr.ptr,
        NonNull::dangling(),
        "ZST Arrays shouldn't allocate at all."
    );
}

#[test]
fn test_uninit_then_init() {
    let mut arr = Array::<usize>::new_uninit(5);
    assert_eq!(arr.size(), 5, "Size should be tracked before initialization.");

    for i in 0..5 {
        arr[i] = MaybeUninit::new(i);
    }

    // SAFETY: All 5 values have just been written.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(&*arr, &[0, 1, 2, 3, 4]);
}

#[test]
fn test_empty() {
    let arr: Array<u8> = Array::new();
    assert_eq!(arr.size(), 0);
    assert!(arr.is_empty(), "An empty Array should deref to an empty slice.");
}

#[test]
fn test_drops_elements() {
    let counter = CountedDrop::new(0);

    let arr = Array::from_iter_sized((0..4).map(|_| counter.clone()));
    assert_eq!(*counter.borrow(), 0, "Nothing should be dropped while the Array is alive.");
    drop(arr);

    assert_eq!(
        *counter.borrow(),
        4,
        "Dropping the Array should drop each element exactly once."
    );
}

#[test]
fn test_clone_and_eq() {
    let arr = Array::from_iter_sized(0..6);
    let other = arr.clone();

    assert_eq!(arr, other, "A cloned Array should compare equal to the original.");
    assert_ne!(
        arr.ptr, other.ptr,
        "A cloned Array should own a separate allocation."
    );
}
