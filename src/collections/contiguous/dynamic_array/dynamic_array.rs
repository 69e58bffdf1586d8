use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::error::{
    AccessError, CapacityOverflow, EmptyContainer, IndexOutOfRange, ValueNotFound,
};
use crate::util::result::ResultExtension;

/// The initial capacity of every DynamicArray. The capacity never drops below this value and is
/// always a power-of-two multiple of it.
pub const BASE_CAP: usize = 4;

const GROWTH_FACTOR: usize = 2;

/// A growable, shrinkable random-access sequence, based on [`Array<T>`].
///
/// # Capacity management
/// The backing [`Array`] starts at [`BASE_CAP`] slots. When an element is added to a full
/// DynamicArray the capacity doubles first; when a removal leaves the length at exactly a quarter
/// of the capacity (and the capacity is above [`BASE_CAP`]) the capacity halves. Both steps are an
/// explicit reallocation: a new [`Array`] is created and the initialized prefix is bulk-copied
/// across. Utilization therefore stays between 25% and 100% (outside of the base allocation), and
/// halving at a quarter rather than a half means alternating additions and removals near a
/// capacity boundary can't oscillate between growing and shrinking.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)`*, `O(n)` |
/// | `prepend` | `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `delete` | `O(n-i)` |
/// | `find` | `O(n)` |
/// | `remove` | `O(n)` |
///
/// \* Amortized: an individual `append` or `pop` that crosses a capacity boundary costs `O(n)`
/// for the copy, but doubling/halving bounds the total copy work over any sequence of `N`
/// operations to `O(N)`.
pub struct DynamicArray<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with length 0 and capacity [`BASE_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.capacity(), 4);
    /// assert!(arr.is_empty());
    /// ```
    pub fn new() -> DynamicArray<T> {
        DynamicArray {
            arr: Array::new_uninit(BASE_CAP),
            len: 0,
        }
    }

    /// Returns the length of the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the DynamicArray: the number of allocated slots, which is
    /// always at least the length.
    pub const fn capacity(&self) -> usize {
        self.arr.size()
    }

    /// Adds the provided value at the logical end of the DynamicArray, doubling the capacity
    /// first if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// for i in 0..5 {
    ///     arr.append(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4]);
    /// assert_eq!(arr.capacity(), 8);
    /// ```
    pub fn append(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }

        // SAFETY: len < capacity after the growth check, so the write is in bounds and targets a
        // slot holding no initialized value.
        unsafe {
            self.arr.ptr.add(self.len).write(MaybeUninit::new(value));
        }
        self.len += 1;
    }

    /// Inserts the provided value at index 0, shifting every existing element one slot to the
    /// right. Doubles the capacity first if the DynamicArray is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// arr.append(2);
    /// arr.prepend(1);
    /// assert_eq!(&*arr, &[1, 2]);
    /// ```
    pub fn prepend(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }

        // SAFETY: len < capacity after the growth check, so shifting the initialized prefix one
        // slot right stays in bounds. ptr::copy handles the overlapping ranges.
        unsafe {
            ptr::copy(self.arr.ptr.as_ptr(), self.arr.ptr.as_ptr().add(1), self.len);
            self.arr.ptr.write(MaybeUninit::new(value));
        }
        self.len += 1;
    }

    /// Overwrites the element at the provided index, dropping the old value. The index is checked
    /// against the length, not the capacity: a slot beyond the length holds no element to
    /// overwrite, and writing it here would corrupt the initialized-prefix invariant.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (1..=3).collect();
    /// assert_eq!(arr.set(1, 20), Ok(()));
    /// assert_eq!(&*arr, &[1, 20, 3]);
    /// assert!(arr.set(3, 40).is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        self.check_index(index)?;

        let old = mem::replace(&mut self.arr[index], MaybeUninit::new(value));
        // SAFETY: index < len, so the replaced slot held an initialized value.
        drop(unsafe { old.assume_init() });
        Ok(())
    }

    /// Returns a reference to the element at the provided index.
    ///
    /// Fails with [`EmptyContainer`] when there are no elements at all, and with
    /// [`IndexOutOfRange`] when the index doesn't refer to one of them.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<_> = (1..=3).collect();
    /// assert_eq!(arr.get(0), Ok(&1));
    /// assert!(arr.get(3).unwrap_err().is_index_out_of_range());
    ///
    /// let empty: DynamicArray<u8> = DynamicArray::new();
    /// assert!(empty.get(0).unwrap_err().is_empty_container());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, AccessError> {
        if self.len == 0 {
            return Err(EmptyContainer.into());
        }
        self.check_index(index)?;

        // SAFETY: index < len and all values below len are initialized.
        Ok(unsafe { self.arr[index].assume_init_ref() })
    }

    /// Removes and returns the element at the provided index, shifting every following element
    /// one slot to the left. Halves the capacity if the removal leaves the DynamicArray at a
    /// quarter utilization.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (1..=4).collect();
    /// assert_eq!(arr.delete(1), Ok(2));
    /// assert_eq!(&*arr, &[1, 3, 4]);
    /// ```
    pub fn delete(&mut self, index: usize) -> Result<T, AccessError> {
        if self.len == 0 {
            return Err(EmptyContainer.into());
        }
        self.check_index(index)?;

        Ok(self.remove_at(index))
    }

    /// Inserts the provided value at the given index, shifting the elements from the index
    /// onwards one slot to the right. Doubles the capacity first if the DynamicArray is full.
    ///
    /// `index == len` is permitted and equivalent to [`append`](DynamicArray::append); anything
    /// beyond that fails with [`IndexOutOfRange`] rather than leaving a gap of uninitialized
    /// slots inside the logical length.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (0..3).collect();
    /// arr.insert(1, 100)?;
    /// arr.insert(4, 300)?;
    /// assert_eq!(&*arr, &[0, 100, 1, 2, 300]);
    /// assert!(arr.insert(6, 400).is_err());
    /// # Ok::<(), classic_collections::collections::IndexOutOfRange>(())
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        if index > self.len {
            return Err(IndexOutOfRange { index, len: self.len });
        }

        if self.len == self.capacity() {
            self.grow();
        }

        // SAFETY: index <= len < capacity, so both the shift of [index, len) one slot right and
        // the write at index stay in bounds. ptr::copy handles the overlapping ranges.
        unsafe {
            ptr::copy(
                self.arr.ptr.as_ptr().add(index),
                self.arr.ptr.as_ptr().add(index + 1),
                self.len - index,
            );
            self.arr.ptr.add(index).write(MaybeUninit::new(value));
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element. Halves the capacity if the removal leaves the
    /// DynamicArray at a quarter utilization.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (1..=3).collect();
    /// assert_eq!(arr.pop(), Ok(3));
    /// assert_eq!(arr.len(), 2);
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        if self.len == 0 {
            return Err(EmptyContainer);
        }

        self.len -= 1;
        // SAFETY: len has just been decremented, so the slot at len holds an initialized value
        // which is now logically vacated. Reading it is a bitwise move off the heap.
        let value = unsafe { self.arr.ptr.add(self.len).read().assume_init() };
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Removes the element at `index` without bounds checks, then applies the shrink rule.
    /// Callers guarantee `index < len`.
    fn remove_at(&mut self, index: usize) -> T {
        // SAFETY: index < len, so the slot is initialized; the copy shifts the initialized suffix
        // left by one, leaving the slot past the new len logically uninitialized.
        let value = unsafe {
            let value = self.arr.ptr.add(index).read().assume_init();
            ptr::copy(
                self.arr.ptr.as_ptr().add(index + 1),
                self.arr.ptr.as_ptr().add(index),
                self.len - index - 1,
            );
            value
        };
        self.len -= 1;
        self.shrink_if_sparse();
        value
    }

    /// Reallocates the backing [`Array`] with `new_cap` slots: a new allocation is created, the
    /// initialized prefix is bulk-copied across and the old allocation is released. This is the
    /// single `O(n)` step that growth and shrinkage amortize over.
    ///
    /// Callers guarantee `new_cap >= len`.
    fn reallocate(&mut self, new_cap: usize) {
        let next = Array::<T>::new_uninit(new_cap);

        // SAFETY: Both allocations hold at least len slots and are distinct, so the regions can't
        // overlap. Ownership of the initialized values transfers to the new allocation.
        unsafe {
            ptr::copy_nonoverlapping(self.arr.ptr.as_ptr(), next.ptr.as_ptr(), self.len);
        }

        // Dropping the old Array only releases its allocation: the slots are MaybeUninit, so the
        // moved elements aren't dropped through it.
        self.arr = next;
    }

    /// Doubles the capacity. After calling this, the DynamicArray can take at least one more
    /// element.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    fn grow(&mut self) {
        let new_cap = self.capacity()
            .checked_mul(GROWTH_FACTOR)
            .ok_or(CapacityOverflow)
            .throw();
        self.reallocate(new_cap);
    }

    /// Halves the capacity when the length has fallen to exactly a quarter of it, keeping at
    /// least [`BASE_CAP`] slots. Checking for equality rather than `<=` means the rule fires once
    /// per boundary crossing.
    fn shrink_if_sparse(&mut self) {
        let cap = self.capacity();
        if self.len == cap / 4 && cap > BASE_CAP {
            self.reallocate(cap / 2);
        }
    }

    /// Checks that the provided index refers to an element of self.
    fn check_index(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index >= self.len {
            Err(IndexOutOfRange { index, len: self.len })
        } else {
            Ok(())
        }
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Returns the index of the first element equal to the provided value, scanning in sequence
    /// order, or [`None`] when no element matches.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<_> = [4, 7, 4].into_iter().collect();
    /// assert_eq!(arr.find(&4), Some(0));
    /// assert_eq!(arr.find(&9), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Removes and returns the first element equal to the provided value, shifting every
    /// following element one slot to the left. Applies the same shrink rule as
    /// [`delete`](DynamicArray::delete).
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// # use classic_collections::collections::ValueNotFound;
    /// let mut arr: DynamicArray<_> = [4, 7, 4].into_iter().collect();
    /// assert_eq!(arr.remove(&4), Ok(4));
    /// assert_eq!(&*arr, &[7, 4]);
    /// assert_eq!(arr.remove(&9), Err(ValueNotFound));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T, ValueNotFound> {
        let index = self.find(value).ok_or(ValueNotFound)?;
        Ok(self.remove_at(index))
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(value);
        arr
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        for i in 0..self.len {
            // SAFETY: All values below len are initialized and safe to drop.
            unsafe { self.arr.ptr.add(i).as_mut().assume_init_drop(); }
        }

        // self.arr drops implicitly. Its slots are MaybeUninit with no drop glue, so this only
        // releases the allocation.
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The DynamicArray is valid as a slice for len values, which are all initialized.
        // The pointer is nonnull, properly aligned and the range entirely contained within the
        // allocation. The borrow checker enforces that self isn't mutated while the slice lives.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *const T for all values below len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The DynamicArray is valid as a slice for len values, which are all initialized.
        // The pointer is nonnull, properly aligned and the range entirely contained within the
        // allocation. The borrow checker enforces exclusive access through &mut self.
        unsafe {
            slice::from_raw_parts_mut(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values below len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: DynamicArrays, when used safely, rely on unique pointers and are therefore safe for
// Send when T: Send.
unsafe impl<T: Send> Send for DynamicArray<T> {}
// SAFETY: DynamicArray's safe API obeys all rules of the borrow checker, so no interior
// mutability occurs. This means that DynamicArray<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut arr = DynamicArray::new();
        for value in self.iter() {
            arr.append(value.clone());
        }
        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T: Debug> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
