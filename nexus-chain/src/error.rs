//! Error types for list operations.

use thiserror::Error;

/// Failure of a list or node operation.
///
/// None of these are fatal: the list is left exactly as it was before the
/// failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// Positional read or delete outside `[0, size)`.
    #[error("index {index} out of bounds for list of size {size}")]
    OutOfBounds {
        /// The index that was asked for.
        index: isize,
        /// List size at the time of the call.
        size: usize,
    },

    /// No node in the chain matched a predicate or key, or a link slot no
    /// longer names a live position.
    #[error("no matching node in list")]
    NotFound,

    /// A stored value could not be converted into the requested type.
    #[error("type mismatch: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        /// Type the destination wanted.
        expected: &'static str,
        /// Tag of the stored value.
        found: &'static str,
    },
}

impl ChainError {
    #[inline]
    pub(crate) fn out_of_bounds(index: isize, size: usize) -> Self {
        ChainError::OutOfBounds { index, size }
    }
}
