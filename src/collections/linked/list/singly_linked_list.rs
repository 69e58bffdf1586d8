use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Index;

use super::{Length, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::{AccessError, EmptyContainer, IndexOutOfRange, SearchError};
use crate::util::error::{CapacityOverflow, ValueNotFound};
use crate::util::result::ResultExtension;

/// A list with links in one direction and a maintained tail reference.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(n)` |
/// | `find_at` | `O(i)` |
/// | `erase` | `O(i)` |
/// | `add_after/before` | `O(n)` |
///
/// The tail reference is what makes `push_back` and `back` `O(1)`: without it both would scan the
/// whole chain. It can't rescue `pop_back`, which still has to scan for the second-to-last node
/// because nothing links backwards to it.
#[derive(PartialEq, Eq)]
pub struct SinglyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, PartialEq, Eq)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Returns a reference to the first element in the list.
    pub fn front(&self) -> Result<&T, EmptyContainer> {
        match &self.state {
            Empty => Err(EmptyContainer),
            Full(ListContents { head, .. }) => Ok(head.value()),
        }
    }

    /// Returns a reference to the last element in the list, read directly through the tail
    /// pointer.
    pub fn back(&self) -> Result<&T, EmptyContainer> {
        match &self.state {
            Empty => Err(EmptyContainer),
            Full(ListContents { tail, .. }) => Ok(tail.value()),
        }
    }

    /// Adds the provided element to the front of the SinglyLinkedList.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// assert_eq!(list.back(), Ok(&2));
    /// ```
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Adds the provided element to the back of the SinglyLinkedList.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it.
    pub fn pop_front(&mut self) -> Result<T, EmptyContainer> {
        match &mut self.state {
            Empty => Err(EmptyContainer),
            Full(ListContents { len, head, .. }) => {
                let node = head.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: The previous length was greater than 1, so the first node is
                        // followed by at least one more.
                        *head = unsafe { node.next.unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Ok(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it.
    ///
    /// This is the one `O(n)` removal: with no backwards links, finding the node that should
    /// become the new tail means scanning from the head.
    pub fn pop_back(&mut self) -> Result<T, EmptyContainer> {
        match &mut self.state {
            Empty => Err(EmptyContainer),
            Full(contents) => {
                let node = contents.tail.take_node();

                match contents.len.checked_sub(1) {
                    Some(new_len) => {
                        let new_tail = contents.seek(new_len.get() - 1);
                        *new_tail.next_mut() = None;
                        contents.tail = new_tail;
                        contents.len = new_len;
                    },
                    None => self.state = Empty,
                }

                Ok(node.value)
            },
        }
    }

    /// Returns a reference to the element at the provided index, scanning from the head.
    ///
    /// The same functionality can be achieved using the [`Index`] operator, which panics on a
    /// failure instead.
    pub fn find_at(&self, index: usize) -> Result<&T, AccessError> {
        Ok(self.checked_contents_for_index(index)?.seek(index).value())
    }

    /// Removes and returns the element at the provided index, relinking its predecessor around
    /// it. The tail reference is updated when the last element is erased.
    pub fn erase(&mut self, index: usize) -> Result<T, AccessError> {
        let contents = self.checked_contents_for_index_mut(index)?;
        match index {
            0 => {
                // SAFETY: The list has already been checked to be valid for the provided index.
                Ok(unsafe { self.pop_front().unwrap_unchecked() })
            },
            val if val == contents.last_index() => {
                // SAFETY: The list has already been checked to be valid for the provided index.
                Ok(unsafe { self.pop_back().unwrap_unchecked() })
            },
            val => {
                let prev = contents.seek(val - 1);
                // SAFETY: val is below the last index, so the node before it has a next link.
                let node = unsafe { (*prev.next()).unwrap_unchecked() }.take_node();
                *prev.next_mut() = node.next;

                // SAFETY: If the length was 1, index 0 would have matched the first branch.
                contents.len = unsafe { contents.len.checked_sub(1).unwrap_unchecked() };

                Ok(node.value)
            },
        }
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Splices a new node holding `value` immediately after the first node whose value equals
    /// `key`. The tail reference is updated when the match was the tail.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::linked::SinglyLinkedList;
    /// let mut list: SinglyLinkedList<_> = [1, 3].into_iter().collect();
    /// list.add_after(&1, 2)?;
    /// assert_eq!(list.find_at(1), Ok(&2));
    /// # Ok::<(), classic_collections::collections::SearchError>(())
    /// ```
    pub fn add_after(&mut self, key: &T, value: T) -> Result<(), SearchError> {
        match &mut self.state {
            Empty => Err(EmptyContainer.into()),
            Full(contents) => {
                let node = contents.seek_value(key).ok_or(ValueNotFound)?;

                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let new_node = NodePtr::from_node(Node {
                    value,
                    next: *node.next(),
                });
                *node.next_mut() = Some(new_node);

                if contents.tail == node {
                    contents.tail = new_node;
                }

                Ok(())
            },
        }
    }

    /// Splices a new node holding `value` immediately before the first node whose value equals
    /// `key`. When the key matches the head's value, the new node becomes the new head.
    pub fn add_before(&mut self, key: &T, value: T) -> Result<(), SearchError> {
        match &mut self.state {
            Empty => Err(EmptyContainer.into()),
            Full(contents) => {
                if contents.head.value() == key {
                    contents.push_front(value);
                    return Ok(());
                }

                let prev = contents.seek_before(key).ok_or(ValueNotFound)?;

                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let new_node = NodePtr::from_node(Node {
                    value,
                    next: *prev.next(),
                });
                *prev.next_mut() = Some(new_node);

                Ok(())
            },
        }
    }

    /// Returns the index of the first element equal to `item`, if any.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns true if any element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> SinglyLinkedList<T> {
    pub(crate) fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, AccessError> {
        match &self.state {
            Empty => Err(EmptyContainer.into()),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfRange { index, len }.into())
                }
            },
        }
    }

    pub(crate) fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, AccessError> {
        match &mut self.state {
            Empty => Err(EmptyContainer.into()),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfRange { index, len }.into())
                }
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Walks `index` next links forward from the head.
    #[allow(clippy::unwrap_used)]
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        let mut node = self.head;
        for _ in 0..index {
            // UNWRAP: Callers only seek to indices below the length, so a next link exists.
            node = (*node.next()).unwrap();
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            next: Some(self.head),
        });

        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T: PartialEq> ListContents<T> {
    /// Returns the first node whose value equals `key`.
    pub fn seek_value(&self, key: &T) -> Option<NodePtr<T>> {
        let mut node = Some(self.head);
        while let Some(curr) = node {
            if curr.value() == key {
                return Some(curr);
            }
            node = *curr.next();
        }
        None
    }

    /// Returns the node immediately before the first node whose value equals `key`. The head
    /// itself matching is the caller's special case.
    pub fn seek_before(&self, key: &T) -> Option<NodePtr<T>> {
        let mut node = self.head;
        while let Some(next) = *node.next() {
            if next.value() == key {
                return Some(node);
            }
            node = next;
        }
        None
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.find_at(index).throw()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        if let Full(contents) = &self.state {
            let mut curr = Some(contents.head);
            while let Some(ptr) = curr {
                let node = ptr.take_node();
                curr = node.next;
            }
        }
    }
}

impl<T: PartialEq> PartialEq for ListContents<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut node_a = self.head;
        let mut node_b = other.head;

        loop {
            if node_a.value() != node_b.value() {
                break false;
            }
            match (node_a.next(), node_b.next()) {
                (Some(next_a), Some(next_b)) => {
                    node_a = *next_a;
                    node_b = *next_b;
                },
                // Both sides have the same length, so if they aren't both Some, they are both
                // None.
                _ => break true,
            }
        }
    }
}

impl<T: Eq> Eq for ListContents<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Full(contents) = &self.state {
            contents.len.hash(state);
        }
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SinglyLinkedList ")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in self.iter() {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "({item:?})")?;
            first = false;
        }
        Ok(())
    }
}
