use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: This implementation uses Box<T> rather than alloc to allocate nodes on the heap, because
// Box<T> has the special property that dereferencing it allows a value to be moved out of the
// heap.

/// A copyable pointer to a heap-allocated [`Node`]. Each node is logically owned by its
/// predecessor (or by the list itself for the head); the tail never has a next link.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The pointer always refers to a live node allocated through from_node.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The pointer always refers to a live node allocated through from_node.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The pointer always refers to a live node allocated through from_node.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back off the heap, releasing its allocation. The list relinks around the
    /// node before or after calling this, so no live NodePtr refers to it again.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by from_node and ownership of the allocation is
        // surrendered by the owning link before the node is taken.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
