//! Contiguously allocated collections.
//!
//! [`Array`] is a fixed, runtime-sized allocation, similar to a [`Box<[T]>`](Box). It exists
//! mostly as the backing store for everything else in this family: growing a [`DynamicArray`]
//! means allocating a new, larger [`Array`] and bulk-copying the old one into it, which keeps the
//! cost of that step honest. The circular queue borrows it for the same reason.

pub mod array;
pub mod dynamic_array;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use dynamic_array::DynamicArray;
