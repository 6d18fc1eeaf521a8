//! Owned, uninitialized backing storage for [`DynamicArray`](crate::dynamic::DynamicArray).
//!
//! `RawBuffer` only tracks the allocation. It never reads, writes, or drops elements;
//! the owning container decides which slots are live.

use crate::error::ArrayError;
use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::size_of;
use std::ptr::NonNull;

pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the buffer uniquely owns its allocation, like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out what `&T` would.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    /// An empty buffer. No allocation; the pointer is dangling.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates room for exactly `capacity` elements.
    ///
    /// Returns [`ArrayError::CapacityOverflow`] when the byte size does not fit a
    /// `Layout`. Allocator failure is fatal and goes through `handle_alloc_error`.
    pub(crate) fn try_allocate(capacity: usize) -> Result<Self, ArrayError> {
        let layout = Layout::array::<T>(capacity).map_err(|_| ArrayError::CapacityOverflow {
            requested: capacity,
        })?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        };

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Whether this buffer owns an actual heap block.
    #[inline]
    pub(crate) fn is_allocated(&self) -> bool {
        self.capacity > 0 && size_of::<T>() != 0
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if !self.is_allocated() {
            return;
        }
        if let Ok(layout) = Layout::array::<T>(self.capacity) {
            // SAFETY: allocated in `try_allocate` with this exact layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}
