mod array;
mod tests;

pub use array::*;
