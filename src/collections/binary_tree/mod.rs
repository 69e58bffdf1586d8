//! The recursively owned binary search tree.

mod node;
mod tests;
mod tree;

pub use tree::*;
