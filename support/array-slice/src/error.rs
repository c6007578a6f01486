//! Errors reported by [`ArraySlice`](crate::ArraySlice) and [`SharedArray`](crate::SharedArray).
//!
//! Every failure is raised at the point of violation. Nothing in this crate
//! retries or recovers; the caller decides what to do with the error.

use thiserror::Error;

/// Coarse classification of a [`SliceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A constructor was given a range that does not fit its source.
    InvalidArgument,
    /// A structural list operation (insert, remove, append, clear).
    UnsupportedOperation,
    /// A partial view was asked to become its whole backing array.
    InvalidCast,
    /// An index outside the visible range.
    BoundsViolation,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliceError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    #[error("operation `{operation}` is not supported: a slice cannot change its shape")]
    Unsupported { operation: &'static str },

    #[error(
        "cannot convert a slice at offset {offset} with length {len} into its backing array of length {array_len}"
    )]
    InvalidCast {
        offset: usize,
        len: usize,
        array_len: usize,
    },

    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
}

impl SliceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SliceError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            SliceError::Unsupported { .. } => ErrorKind::UnsupportedOperation,
            SliceError::InvalidCast { .. } => ErrorKind::InvalidCast,
            SliceError::OutOfBounds { .. } => ErrorKind::BoundsViolation,
        }
    }

    pub(crate) fn unsupported(operation: &'static str) -> Self {
        tracing::debug!(operation, "rejected structural operation on slice");
        SliceError::Unsupported { operation }
    }
}

pub type Result<T, E = SliceError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            SliceError::InvalidArgument { reason: "x" }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            SliceError::Unsupported { operation: "add" }.kind(),
            ErrorKind::UnsupportedOperation
        );
        assert_eq!(
            SliceError::InvalidCast {
                offset: 1,
                len: 2,
                array_len: 5
            }
            .kind(),
            ErrorKind::InvalidCast
        );
        assert_eq!(
            SliceError::OutOfBounds { index: 3, len: 3 }.kind(),
            ErrorKind::BoundsViolation
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            SliceError::OutOfBounds { index: 3, len: 3 }.to_string(),
            "index 3 out of bounds for length 3"
        );
        assert_eq!(
            SliceError::Unsupported { operation: "clear" }.to_string(),
            "operation `clear` is not supported: a slice cannot change its shape"
        );
    }
}
