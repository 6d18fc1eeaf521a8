//! Growable array.
//!
//! [`DynamicArray`] keeps `length <= capacity` elements in one exclusively owned
//! allocation. Slots `[0, length)` are live; slots `[length, capacity)` are allocated
//! but uninitialized and never dropped.
//!
//! Growth policy:
//! - `push_back` on a full array doubles the capacity (0 becomes 1),
//! - `reserve(k)` reallocates to exactly `k` whenever `length < k`, even if `k` is
//!   below the current capacity,
//! - removal only shrinks the length; capacity never drops on its own.
//!
//! A reallocation allocates the new block first, moves the live elements bitwise, then
//! releases the old block, so a failed allocation leaves the array untouched.

use crate::core::ArrayBase;
use crate::error::ArrayError;
use crate::raw::RawBuffer;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

/// Heap-backed array with amortized O(1) append.
///
/// # Examples
///
/// ```
/// use karray::prelude::*;
///
/// let mut array = DynamicArray::new();
/// array.push_back(5);
/// array.push_back(7);
/// array.push_back(9);
///
/// assert_eq!(array.length(), 3);
/// assert_eq!(array.capacity(), 4);
/// assert_eq!(array.back(), Some(&9));
/// ```
pub struct DynamicArray<T> {
    buf: RawBuffer<T>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with capacity 0. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        match RawBuffer::try_allocate(capacity) {
            Ok(buf) => Self { buf, len: 0 },
            Err(err) => capacity_overflow(err),
        }
    }

    /// Copies every element of `source`; length and capacity both equal `source.len()`.
    pub fn from_slice(source: &[T]) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(source.len());
        for item in source {
            // SAFETY: capacity is source.len() and len < capacity on every iteration.
            unsafe { array.write_next(item.clone()) };
        }
        array
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Appends `value`, doubling the capacity first when the array is full.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        // SAFETY: `grow` guarantees a free slot.
        unsafe { self.write_next(value) };
    }

    /// Removes and returns the last element, or `None` when empty.
    ///
    /// Capacity is unchanged.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was live and is now outside the live range,
        // so it is read exactly once.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    /// Reallocates to exactly `new_capacity` slots when `length < new_capacity`;
    /// otherwise does nothing.
    ///
    /// # Panics
    ///
    /// Panics when the requested byte size overflows. Allocator failure aborts.
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            capacity_overflow(err);
        }
    }

    /// Fallible form of [`reserve`](DynamicArray::reserve).
    ///
    /// On error the array is left exactly as it was.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if self.len < new_capacity {
            self.reallocate(new_capacity)?;
        }
        Ok(())
    }

    /// First live element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Last live element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Drops every live element. Capacity is unchanged.
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.len);
        // Length first: a panicking destructor must not lead to a double drop.
        self.len = 0;
        // SAFETY: `live` covered exactly the initialized prefix.
        unsafe { ptr::drop_in_place(live) };
    }

    /// # Safety
    ///
    /// `self.len < self.capacity()` must hold.
    #[inline]
    unsafe fn write_next(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        // SAFETY: the slot is allocated and not live.
        unsafe { ptr::write(self.buf.as_ptr().add(self.len), value) };
        self.len += 1;
    }

    fn grow(&mut self) {
        let new_capacity = match self.capacity() {
            0 => 1,
            capacity => match capacity.checked_mul(2) {
                Some(doubled) => doubled,
                None => capacity_overflow(ArrayError::CapacityOverflow {
                    requested: capacity,
                }),
            },
        };
        if let Err(err) = self.reallocate(new_capacity) {
            capacity_overflow(err);
        }
    }

    /// Moves the live elements into a fresh block of `new_capacity` slots.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        debug_assert!(self.len <= new_capacity);
        let fresh = RawBuffer::try_allocate(new_capacity)?;

        tracing::trace!(
            length = self.len,
            old_capacity = self.capacity(),
            new_capacity,
            "reallocating dynamic array"
        );

        // SAFETY: both blocks hold at least `len` slots and never overlap. The old
        // block is only deallocated afterwards; its slots are not dropped.
        unsafe { ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_ptr(), self.len) };
        self.buf = fresh;
        Ok(())
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow(err: ArrayError) -> ! {
    panic!("{err}")
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> ArrayBase for DynamicArray<T> {
    type Item = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized; the pointer is dangling only when len is 0
        // or T is zero-sized, both valid for `from_raw_parts`.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` makes the view unique.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    #[inline]
    fn length(&self) -> usize {
        self.len
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let items = iter.into_iter();
        let (lower, _) = items.size_hint();
        let wanted = self.len.saturating_add(lower);
        if wanted > self.capacity() {
            self.reserve(wanted);
        }
        for item in items {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(source: &[T]) -> Self {
        Self::from_slice(source)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let array = ManuallyDrop::new(self);
        // SAFETY: `array` is never dropped, so the buffer moves out exactly once.
        let buf = unsafe { ptr::read(&array.buf) };
        IntoIter {
            buf,
            start: 0,
            end: array.len,
        }
    }
}

/// Owning iterator over the elements of a [`DynamicArray`].
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    // Live slots are `[start, end)`.
    start: usize,
    end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start` is live and leaves the live range right after the read.
        let item = unsafe { ptr::read(self.buf.as_ptr().add(self.start)) };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: the old `end - 1` was live and is now outside the live range.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: `[start, end)` still holds initialized elements.
        let remaining = ptr::slice_from_raw_parts_mut(
            unsafe { self.buf.as_ptr().add(self.start) },
            self.end - self.start,
        );
        self.start = self.end;
        unsafe { ptr::drop_in_place(remaining) };
    }
}
