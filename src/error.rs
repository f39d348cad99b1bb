//! Error types for identifier generation.

use thiserror::Error;

use crate::ports::random::SourceError;

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors that can occur while generating an identifier.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Supplied or generated entropy is shorter than 16 bytes.
    #[error("random bytes length must be >= 16, got {len}")]
    InvalidRandomness {
        /// Number of bytes actually available.
        len: usize,
    },

    /// Output buffer cannot hold 16 bytes at the requested offset.
    #[error("UUID byte range {offset}:{end} is out of buffer bounds (buffer length {len})")]
    OutOfBounds {
        /// Requested start offset.
        offset: usize,
        /// Exclusive end of the requested range.
        end: usize,
        /// Length of the supplied buffer.
        len: usize,
    },

    /// The randomness source itself failed.
    #[error("randomness source failed: {0}")]
    Source(#[source] SourceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_range() {
        let err = GenerateError::OutOfBounds { offset: 1, end: 17, len: 16 };
        assert_eq!(
            err.to_string(),
            "UUID byte range 1:17 is out of buffer bounds (buffer length 16)"
        );
    }

    #[test]
    fn source_error_exposes_cause() {
        let err = GenerateError::Source("entropy pool closed".into());
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("entropy pool closed"));
    }
}
