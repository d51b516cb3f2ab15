//! Error types for kclosest

use thiserror::Error;

/// Errors raised when constructing a bounded heap
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HeapError {
    /// A bounded heap must be able to hold at least one point.
    #[error("invalid heap capacity {capacity}: capacity must be at least 1")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
    },
}

/// Result alias for fallible heap operations
pub type Result<T> = std::result::Result<T, HeapError>;
