//! Core traits for karray.
//!
//! This module defines [`ArrayBase`], the access contract shared by every container in
//! the crate (and implementable by outside collections). A conforming type exposes one
//! contiguous run of live elements:
//! - checked access through [`ArrayBase::at`],
//! - unchecked access through the `unsafe` [`ArrayBase::get_unchecked`],
//! - forward and reverse iteration over exactly the live elements,
//! - `length` in elements and `size` in bytes, with `size() == length() * size_of::<Item>()`.

use crate::error::ArrayError;
use std::mem::size_of;
use std::slice;

/// The element-access contract every array variant implements.
///
/// Implementors only provide [`as_slice`](ArrayBase::as_slice) and
/// [`as_mut_slice`](ArrayBase::as_mut_slice); everything else is derived from the live
/// range. Fixed-size containers additionally override [`length`](ArrayBase::length)
/// with their compile-time element count.
///
/// The trait is object safe, so containers with different storage strategies can be
/// used interchangeably behind `dyn ArrayBase<Item = T>`.
///
/// # Examples
///
/// ```
/// use karray::core::ArrayBase;
///
/// struct Readings {
///     samples: Vec<u16>,
/// }
///
/// impl ArrayBase for Readings {
///     type Item = u16;
///
///     fn as_slice(&self) -> &[u16] {
///         &self.samples
///     }
///
///     fn as_mut_slice(&mut self) -> &mut [u16] {
///         &mut self.samples
///     }
/// }
///
/// let readings = Readings { samples: vec![3, 1, 2] };
/// assert_eq!(readings.size(), 6);
/// assert_eq!(readings.at(1), Ok(&1));
/// assert!(readings.at(3).is_err());
/// ```
pub trait ArrayBase {
    /// Element type stored by the container.
    type Item;

    /// Returns the live elements as a slice, the `[begin, end)` range.
    fn as_slice(&self) -> &[Self::Item];

    /// Returns the live elements as a mutable slice.
    fn as_mut_slice(&mut self) -> &mut [Self::Item];

    /// Returns a pointer to the first element.
    ///
    /// For an empty container this is a dangling, well-aligned pointer that marks an
    /// empty range; it must not be dereferenced.
    #[inline]
    fn data(&self) -> *const Self::Item {
        self.as_slice().as_ptr()
    }

    /// Mutable counterpart of [`data`](ArrayBase::data).
    #[inline]
    fn data_mut(&mut self) -> *mut Self::Item {
        self.as_mut_slice().as_mut_ptr()
    }

    /// Returns the number of live elements.
    #[inline]
    fn length(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns the byte size of the live elements.
    #[inline]
    fn size(&self) -> usize {
        self.length() * size_of::<Self::Item>()
    }

    /// Returns `true` if the container holds no live elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Fails with [`ArrayError::OutOfRange`] when `index >= length()`. The bound is
    /// checked on every call.
    #[inline]
    fn at(&self, index: usize) -> Result<&Self::Item, ArrayError> {
        let length = self.length();
        if index < length {
            Ok(&self.as_slice()[index])
        } else {
            Err(ArrayError::OutOfRange { index, length })
        }
    }

    /// Mutable counterpart of [`at`](ArrayBase::at).
    #[inline]
    fn at_mut(&mut self, index: usize) -> Result<&mut Self::Item, ArrayError> {
        let length = self.length();
        if index < length {
            Ok(&mut self.as_mut_slice()[index])
        } else {
            Err(ArrayError::OutOfRange { index, length })
        }
    }

    /// Returns a reference to the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`length`](ArrayBase::length). Anything else is
    /// undefined behavior; debug builds assert the precondition.
    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Item {
        debug_assert!(index < self.length(), "unchecked index {index} out of range");
        // SAFETY: the caller guarantees `index < length`.
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Mutable counterpart of [`get_unchecked`](ArrayBase::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than [`length`](ArrayBase::length).
    #[inline]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Self::Item {
        debug_assert!(index < self.length(), "unchecked index {index} out of range");
        // SAFETY: the caller guarantees `index < length`.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Iterates the live elements front to back. Use `.rev()` for reverse order.
    #[inline]
    fn iter(&self) -> slice::Iter<'_, Self::Item> {
        self.as_slice().iter()
    }

    /// Iterates the live elements mutably.
    #[inline]
    fn iter_mut(&mut self) -> slice::IterMut<'_, Self::Item> {
        self.as_mut_slice().iter_mut()
    }
}

// Plain arrays already satisfy the contract with N live elements.
impl<T, const N: usize> ArrayBase for [T; N] {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn length(&self) -> usize {
        N
    }
}

// Explicit Vec impl so standard vectors can be mixed with karray containers.
impl<T> ArrayBase for Vec<T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}
