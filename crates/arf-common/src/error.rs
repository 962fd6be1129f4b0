//! Error types for arf-common.

use thiserror::Error;

/// Common error type for ARF byte-level operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A region or write extends past the end of its parent buffer.
    #[error("region out of bounds: {len} bytes at offset {offset:#x}, but only {available} available")]
    OutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },

    /// Encoded text does not fit its fixed-width field.
    #[error("encoded text needs {needed} bytes but the field holds {budget}")]
    EncodingOverflow { budget: usize, needed: usize },

    /// Character cannot be represented by the fixed-width codec.
    #[error("character {0:?} cannot be encoded")]
    UnencodableChar(char),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
