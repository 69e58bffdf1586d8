//! A module containing [`DynamicArray`] and associated types.
//!
//! [`IntoIter`] provides owned iteration; [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for borrowed iteration via
//! [`Deref`](std::ops::Deref).
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod dynamic_array;
mod iter;

pub use dynamic_array::*;
pub use iter::*;
