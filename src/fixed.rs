//! Fixed-size containers.
//!
//! Both types hold exactly `N` elements for their whole lifetime; `N` is part of the
//! type. They differ only in where the elements live:
//! - [`StackArray`] embeds `[T; N]` in place (on the stack, or inside whatever owns it),
//! - [`HeapArray`] owns one separate heap allocation of exactly `N` slots, released once
//!   when the array is dropped.
//!
//! Construction from a source sequence copies `min(N, source length)` elements
//! positionally and leaves the tail at `T::default()`. Sources longer than `N` are
//! truncated; the source iterator is never advanced past `N` items.

use crate::core::ArrayBase;
use std::ops::{Deref, DerefMut};
use std::slice;

/// Array of exactly `N` elements stored inline.
///
/// # Examples
///
/// ```
/// use karray::prelude::*;
///
/// let array = StackArray::<i32, 3>::from_slice(&[1, 2]);
/// assert_eq!(array.as_slice(), &[1, 2, 0]);
/// assert_eq!(array.length(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StackArray<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> StackArray<T, N> {
    /// Number of elements, fixed by the type.
    pub const LENGTH: usize = N;

    /// Wraps an existing array.
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Unwraps into the inner array.
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: Default, const N: usize> StackArray<T, N> {
    /// Creates an array with every element set to `T::default()`.
    pub fn new() -> Self {
        Self {
            data: std::array::from_fn(|_| T::default()),
        }
    }

    /// Copies the first `min(N, source.len())` elements of `source`.
    pub fn from_slice(source: &[T]) -> Self
    where
        T: Clone,
    {
        source.iter().cloned().collect()
    }
}

impl<T: Default, const N: usize> Default for StackArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, const N: usize> FromIterator<T> for StackArray<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items = iter.into_iter().fuse();
        // `from_fn` visits indices in order, so this pulls at most N items.
        Self {
            data: std::array::from_fn(|_| items.next().unwrap_or_default()),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for StackArray<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const N: usize> ArrayBase for StackArray<T, N> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn length(&self) -> usize {
        N
    }
}

/// Array of exactly `N` elements in a separately owned heap allocation.
///
/// Cloning allocates fresh storage; a clone never shares elements with its source.
///
/// # Examples
///
/// ```
/// use karray::prelude::*;
///
/// let original = HeapArray::<u8, 4>::from_slice(&[9, 8, 7, 6, 5]);
/// let mut copy = original.clone();
/// copy[0] = 0;
///
/// assert_eq!(original.as_slice(), &[9, 8, 7, 6]);
/// assert_eq!(copy.as_slice(), &[0, 8, 7, 6]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HeapArray<T, const N: usize> {
    // Always exactly N elements.
    data: Box<[T]>,
}

impl<T, const N: usize> HeapArray<T, N> {
    /// Number of elements, fixed by the type.
    pub const LENGTH: usize = N;
}

impl<T: Default, const N: usize> HeapArray<T, N> {
    /// Allocates `N` slots, each set to `T::default()`.
    pub fn new() -> Self {
        Self {
            data: (0..N).map(|_| T::default()).collect(),
        }
    }

    /// Copies the first `min(N, source.len())` elements of `source`.
    pub fn from_slice(source: &[T]) -> Self
    where
        T: Clone,
    {
        source.iter().cloned().collect()
    }
}

impl<T: Default, const N: usize> Default for HeapArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, const N: usize> FromIterator<T> for HeapArray<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items = iter.into_iter().fuse();
        Self {
            data: (0..N).map(|_| items.next().unwrap_or_default()).collect(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for HeapArray<T, N> {
    fn from(data: [T; N]) -> Self {
        Self {
            data: Box::new(data),
        }
    }
}

impl<T, const N: usize> ArrayBase for HeapArray<T, N> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn length(&self) -> usize {
        N
    }
}

// Slice views and iteration are identical for both storage variants.
macro_rules! impl_fixed_views {
    ($array:ident) => {
        impl<T, const N: usize> Deref for $array<T, N> {
            type Target = [T];

            fn deref(&self) -> &[T] {
                &self.data
            }
        }

        impl<T, const N: usize> DerefMut for $array<T, N> {
            fn deref_mut(&mut self) -> &mut [T] {
                &mut self.data
            }
        }

        impl<T, const N: usize> AsRef<[T]> for $array<T, N> {
            fn as_ref(&self) -> &[T] {
                &self.data
            }
        }

        impl<T, const N: usize> AsMut<[T]> for $array<T, N> {
            fn as_mut(&mut self) -> &mut [T] {
                &mut self.data
            }
        }

        impl<'a, T, const N: usize> IntoIterator for &'a $array<T, N> {
            type Item = &'a T;
            type IntoIter = slice::Iter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.data.iter()
            }
        }

        impl<'a, T, const N: usize> IntoIterator for &'a mut $array<T, N> {
            type Item = &'a mut T;
            type IntoIter = slice::IterMut<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.data.iter_mut()
            }
        }
    };
}

impl_fixed_views!(StackArray);
impl_fixed_views!(HeapArray);
