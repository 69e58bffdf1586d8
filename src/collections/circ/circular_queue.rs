use std::fmt::{self, Debug, Display, Formatter};
use std::mem::{self, MaybeUninit};

use crate::collections::contiguous::Array;
#[doc(inline)]
pub use crate::util::error::{CapacityExceeded, EmptyContainer};

/// The number of slots a CircularQueue allocates when none is specified.
pub const DEFAULT_CAP: usize = 5;

/// A FIFO queue over a fixed ring of slots, where a read and a write index chase each other
/// around the buffer.
///
/// No allocation ever happens after construction: enqueuing into a full ring is an error, not a
/// resize. One slot is always kept vacant so that `read == write` can mean empty without being
/// ambiguous with full; a ring constructed with `cap` slots therefore holds at most `cap - 1`
/// elements.
///
/// # Time Complexity
/// Every method on this type is `O(1)`.
///
/// # Examples
/// ```
/// # use classic_collections::collections::circ::CircularQueue;
/// let mut queue = CircularQueue::with_cap(3);
/// queue.enqueue(1)?;
/// queue.enqueue(2)?;
/// assert!(queue.is_full());
/// assert_eq!(queue.dequeue(), Ok(1));
/// # Ok::<(), classic_collections::collections::CapacityExceeded>(())
/// ```
pub struct CircularQueue<T> {
    buf: Array<MaybeUninit<T>>,
    read: usize,
    write: usize,
}

impl<T> CircularQueue<T> {
    /// Creates a new CircularQueue with [`DEFAULT_CAP`] slots.
    pub fn new() -> CircularQueue<T> {
        CircularQueue::with_cap(DEFAULT_CAP)
    }

    /// Creates a new CircularQueue with the provided number of slots.
    ///
    /// # Panics
    /// Panics if `cap < 2`: with one slot reserved as the vacancy marker, anything smaller could
    /// never hold an element.
    pub fn with_cap(cap: usize) -> CircularQueue<T> {
        assert!(cap >= 2, "A CircularQueue requires at least 2 slots!");

        CircularQueue {
            buf: Array::new_uninit(cap),
            read: 0,
            write: 0,
        }
    }

    /// Returns the total number of slots in the ring, including the reserved one.
    pub const fn cap(&self) -> usize {
        self.buf.size()
    }

    /// Returns the number of elements currently in the CircularQueue.
    pub const fn len(&self) -> usize {
        (self.write + self.cap() - self.read) % self.cap()
    }

    /// Returns true if the CircularQueue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.read == self.write
    }

    /// Returns true if the CircularQueue has no vacant slot left for an enqueue.
    pub const fn is_full(&self) -> bool {
        self.advance(self.write) == self.read
    }

    /// Writes the provided element at the write index and steps the index forward, wrapping at
    /// the end of the buffer.
    pub fn enqueue(&mut self, value: T) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            return Err(CapacityExceeded {
                cap: self.cap(),
            });
        }

        self.buf[self.write] = MaybeUninit::new(value);
        self.write = self.advance(self.write);
        Ok(())
    }

    /// Moves the element at the read index out and steps the index forward, wrapping at the end
    /// of the buffer. The vacated slot is returned to its uninitialized state.
    pub fn dequeue(&mut self) -> Result<T, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }

        let slot = mem::replace(&mut self.buf[self.read], MaybeUninit::uninit());
        self.read = self.advance(self.read);

        // SAFETY: Every slot in read..write was written by enqueue, and dequeue uninitializes
        // slots only after stepping read past them.
        Ok(unsafe { slot.assume_init() })
    }

    /// Returns a reference to the element at the read index, without removing it.
    pub fn front(&self) -> Result<&T, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }

        // SAFETY: The queue is non-empty, so the slot at the read index is initialized.
        Ok(unsafe { self.buf[self.read].assume_init_ref() })
    }

    const fn advance(&self, index: usize) -> usize {
        (index + 1) % self.cap()
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for CircularQueue<T> {
    fn drop(&mut self) {
        let mut index = self.read;
        while index != self.write {
            // SAFETY: Slots between the read and write indices are exactly the live elements.
            unsafe { self.buf[index].assume_init_drop() };
            index = self.advance(index);
        }
    }
}

impl<T: Debug> CircularQueue<T> {
    fn fmt_contents(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut index = self.read;
        while index != self.write {
            // SAFETY: Slots between the read and write indices are exactly the live elements.
            list.entry(unsafe { self.buf[index].assume_init_ref() });
            index = self.advance(index);
        }
        list.finish()
    }
}

impl<T: Debug> Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CircularQueue ")?;
        self.fmt_contents(f)
    }
}

impl<T: Debug> Display for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_contents(f)
    }
}
