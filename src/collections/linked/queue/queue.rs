use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::collections::linked::list::{IntoIter, Iter, SinglyLinkedList};
#[doc(inline)]
pub use crate::util::error::EmptyContainer;

/// A FIFO queue, implemented as a thin adapter over a [`SinglyLinkedList`].
///
/// Elements enter at the back of the list and leave from the front, so both `enqueue` and
/// `dequeue` are `O(1)`: the list's tail reference covers the one and its head the other.
///
/// # Examples
/// ```
/// # use classic_collections::collections::linked::Queue;
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.front(), Ok(&2));
/// ```
pub struct Queue<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates a new Queue with no elements.
    pub const fn new() -> Queue<T> {
        Queue {
            list: SinglyLinkedList::new(),
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds the provided element to the back of the Queue.
    pub fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes the element at the front of the Queue and returns it.
    pub fn dequeue(&mut self) -> Result<T, EmptyContainer> {
        self.list.pop_front()
    }

    /// Returns a reference to the element at the front of the Queue, without removing it.
    pub fn front(&self) -> Result<&T, EmptyContainer> {
        self.list.front()
    }

    /// Returns a borrowing iterator over the elements of the Queue, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            list: SinglyLinkedList::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Hash> Hash for Queue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.list.hash(state);
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Queue ")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}
