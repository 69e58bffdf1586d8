use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The operation requires at least one element, but the container holds none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContainer;

impl Display for EmptyContainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty container!")
    }
}

impl Error for EmptyContainer {}

/// The provided index doesn't refer to an element of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of range for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfRange {}

/// A keyed lookup scanned the whole container without finding a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueNotFound;

impl Display for ValueNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value not found!")
    }
}

impl Error for ValueNotFound {}

/// A fixed-capacity container has no free slot for the new element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    pub cap: usize,
}

impl Display for CapacityExceeded {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed capacity of {} slots exceeded!", self.cap)
    }
}

impl Error for CapacityExceeded {}

/// The length counter itself would overflow a [`usize`]. Unreachable for any allocation that
/// actually fits in memory, which is why it is surfaced by panicking rather than in signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Failure of an element access by index: the container may be empty, or the index may not refer
/// to one of its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum AccessError {
    EmptyContainer(EmptyContainer),
    IndexOutOfRange(IndexOutOfRange),
}

/// Failure of an element lookup by value: the container may be empty, or no element may match the
/// provided key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum SearchError {
    EmptyContainer(EmptyContainer),
    ValueNotFound(ValueNotFound),
}
