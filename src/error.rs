//! Error types for karray.
use thiserror::Error;

/// Errors reported by the checked container operations.
///
/// Only [`ArrayBase::at`](crate::core::ArrayBase::at) and its mutable twin produce
/// [`ArrayError::OutOfRange`]. Unchecked access and the `unsafe` fast paths never report
/// errors; upholding their preconditions is the caller's job.
#[derive(Debug, Clone, Copy, Error, Eq, PartialEq)]
pub enum ArrayError {
    /// The index is not less than the current length.
    #[error("index {index} out of range for array of length {length}")]
    OutOfRange { index: usize, length: usize },

    /// The byte size of the requested allocation exceeds `isize::MAX`.
    #[error("capacity overflow: cannot allocate {requested} elements")]
    CapacityOverflow { requested: usize },
}
