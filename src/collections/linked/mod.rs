//! Linked collection types: [`SinglyLinkedList`] and the FIFO [`Queue`] adapter built on top of
//! it.

pub mod list;
pub mod queue;

#[doc(inline)]
pub use list::SinglyLinkedList;
#[doc(inline)]
pub use queue::Queue;
