use std::iter::FusedIterator;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ptr;

use super::DynamicArray;
use crate::collections::contiguous::Array;

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);

        // SAFETY: self is wrapped in ManuallyDrop, so its Drop impl never runs; ownership of the
        // allocation and of the initialized prefix moves into the iterator.
        let buf = unsafe { ptr::read(&this.arr) };

        IntoIter {
            buf,
            start: 0,
            end: this.len,
        }
    }
}

/// An owned iterator over a [`DynamicArray`]. See [`DynamicArray::into_iter`].
///
/// Holds onto the backing [`Array`] for its whole lifetime: slots in `start..end` still contain
/// initialized values, everything else is vacated. Dropping the iterator drops the unyielded
/// values and then releases the allocation through the Array itself.
pub struct IntoIter<T> {
    pub(crate) buf: Array<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end, so the slot at start holds an initialized value. Incrementing
            // start afterwards vacates the slot, making the read a move.
            let value = unsafe { self.buf.ptr.add(self.start).read().assume_init() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end has just been decremented and is >= start, so the slot at end holds an
            // initialized value which is now vacated.
            let value = unsafe { self.buf.ptr.add(self.end).read().assume_init() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: Slots in start..end still hold initialized values that haven't been
            // yielded.
            unsafe { self.buf.ptr.add(i).as_mut().assume_init_drop(); }
        }

        // Implicitly drop self.buf, deallocating the backing storage.
    }
}
