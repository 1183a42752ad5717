// src/numerics/types/error.rs
// Errors raised by the fallible numeric constructors and accessors.

/// Errors that can occur while building or indexing numeric types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumericsError {
    #[error("Invalid argument: expected at least {expected} elements, got {actual}")]
    InvalidArgument { expected: usize, actual: usize },

    #[error("Index out of range: {index} is not below {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result alias for numeric operations.
pub type Result<T, E = NumericsError> = core::result::Result<T, E>;
