//! The fixed-capacity ring buffer.

mod circular_queue;

pub use circular_queue::*;
