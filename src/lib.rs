//! # karray
//!
//! `karray` provides three array containers behind one access contract, and a
//! fork-join parallel merge sort that works on any of them (or on any slice).
//!
//! ## Containers
//!
//! | Type | Storage | Length |
//! |------|---------|--------|
//! | [`StackArray<T, N>`] | inline `[T; N]` | fixed at `N` |
//! | [`HeapArray<T, N>`] | one heap block of `N` slots | fixed at `N` |
//! | [`DynamicArray<T>`] | one heap block, doubled on demand | `0..=capacity` |
//!
//! All of them implement [`ArrayBase`], which offers:
//!
//! - **Checked access**: [`ArrayBase::at`] returns [`ArrayError::OutOfRange`] for
//!   `index >= length()`.
//! - **Unchecked access**: the `unsafe` [`ArrayBase::get_unchecked`]. Passing an index
//!   outside the live range is undefined behavior; the caller upholds the bound.
//! - **Iteration** over exactly the live elements, forward and (via `.rev()`) reverse.
//! - **Sizes**: `length()` in elements and `size()` in bytes.
//!
//! Containers also dereference to `[T]`, so every slice method applies.
//!
//! ```rust
//! use karray::prelude::*;
//!
//! let fixed = StackArray::<i32, 3>::from_slice(&[1, 2]);
//! assert_eq!(fixed.as_slice(), &[1, 2, 0]);
//!
//! let mut growable = DynamicArray::new();
//! for value in [5, 7, 9] {
//!     growable.push_back(value);
//! }
//! assert_eq!((growable.length(), growable.capacity()), (3, 4));
//! assert!(growable.at(3).is_err());
//! ```
//!
//! ## Parallel sort
//!
//! [`par_sort`] splits the slice in half while each half has at least
//! [`SEQUENTIAL_THRESHOLD`] elements and the budget allows it. The left half is sorted
//! on a new scoped thread, the right half on the caller, then the halves are merged in
//! place. Every split lowers the budget by 2. The default budget is half the hardware
//! parallelism.
//!
//! ```rust
//! use karray::prelude::*;
//!
//! let mut data: HeapArray<u16, 4096> = (0..4096u16).rev().collect();
//! let stats = par_sort_with_budget(&mut data, 4);
//!
//! assert!(data.windows(2).all(|w| w[0] <= w[1]));
//! assert_eq!(stats.splits, 3);
//! ```
//!
//! ## Thread safety
//!
//! Containers are single-owner values. They are `Send`/`Sync` when `T` is, but
//! concurrent mutation needs external synchronization like any other Rust value.
//!
//! ## Logging
//!
//! Split decisions and reallocations are reported through [`tracing`] at `trace`/`debug`
//! level. The crate never installs a subscriber.

pub mod algo;
pub mod core;
pub mod dynamic;
pub mod error;
pub mod fixed;
mod raw;

pub use algo::{
    SEQUENTIAL_THRESHOLD, SortStats, default_budget, par_sort, par_sort_by, par_sort_with_budget,
};
pub use crate::core::ArrayBase;
pub use dynamic::DynamicArray;
pub use error::ArrayError;
pub use fixed::{HeapArray, StackArray};

pub mod prelude {
    pub use crate::algo::{SortStats, par_sort, par_sort_by, par_sort_with_budget};
    pub use crate::core::ArrayBase;
    pub use crate::dynamic::DynamicArray;
    pub use crate::error::ArrayError;
    pub use crate::fixed::{HeapArray, StackArray};
}
