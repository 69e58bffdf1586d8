use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Link, ListContents, ListState, SinglyLinkedList};

/// A borrowing iterator over a [`SinglyLinkedList`], which walks the next links from the head.
pub struct Iter<'a, T> {
    node: Link<T>,
    remaining: usize,
    _phantom: PhantomData<&'a T>,
}

impl<T> SinglyLinkedList<T> {
    /// Returns a borrowing iterator over the elements of the list.
    pub fn iter(&self) -> Iter<'_, T> {
        match &self.state {
            ListState::Empty => Iter {
                node: None,
                remaining: 0,
                _phantom: PhantomData,
            },
            ListState::Full(ListContents { len, head, .. }) => Iter {
                node: Some(*head),
                remaining: len.get(),
                _phantom: PhantomData,
            },
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = *node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator over a [`SinglyLinkedList`], which pops elements from the front.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
