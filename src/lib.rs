//! A small library of classic data structures, written from scratch.
//!
//! # Purpose
//! This crate exists to teach (and to learn): each collection here is one of the structures that
//! every introductory course walks through, implemented properly rather than sketched. Writing
//! them out in full, with real ownership and real allocations, is the only way I've found to
//! actually understand where the costs live.
//!
//! # Method
//! The collections are written against their classical contracts, not copied from [`std`]. The
//! dynamic array is the centrepiece because it is the one structure with a genuine algorithmic
//! invariant to uphold: capacity doubles when full and halves at quarter utilization, which is
//! what makes `append` amortized `O(1)` without letting the backing store bloat. The growth step
//! is written as an explicit new allocation plus bulk copy, so the `O(n)` cost of that one step
//! is visible in the code instead of hidden behind a resize call.
//!
//! None of the collections use [`Vec`] or any other `std` container for storage.
//!
//! # Error Handling
//! Failures are part of each structure's contract, so they are surfaced as strongly typed
//! [`Result`]s rather than panics or sentinel values: reading an empty container is
//! [`EmptyContainer`](collections::EmptyContainer), a bad index is
//! [`IndexOutOfRange`](collections::IndexOutOfRange), a failed keyed lookup is
//! [`ValueNotFound`](collections::ValueNotFound) and pushing into a full ring is
//! [`CapacityExceeded`](collections::CapacityExceeded). Enums compose these for operations that
//! can fail in more than one way, keeping dispatch static. The only panicking surface is the
//! indexing operators, where panicking is the established contract.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. Everything else is `std`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
