//! The collection types themselves, one module per family.
//!
//! # Purpose
//! Each family is self-contained: the only cross-dependency is [`Queue`](linked::Queue) sitting
//! on top of [`SinglyLinkedList`](linked::SinglyLinkedList), plus the circular queue borrowing
//! the fixed backing store from [`contiguous`].
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality.

#[cfg(feature = "tree")]
pub mod binary_tree;
#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;

#[doc(inline)]
pub use crate::util::error::{
    AccessError, CapacityExceeded, EmptyContainer, IndexOutOfRange, SearchError, ValueNotFound,
};
