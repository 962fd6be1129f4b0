//! Error types for attack record handling.

use thiserror::Error;

/// Errors that can occur when loading or saving attack records.
#[derive(Debug, Error)]
pub enum Error {
    /// The store ran out of bytes before a full record was read.
    #[error("short attack record: expected {needed} bytes, got {available}")]
    Read { needed: usize, available: usize },

    /// The store rejected a seek, write or flush during save.
    #[error("failed to write attack record: {0}")]
    Write(#[source] std::io::Error),

    /// I/O error outside of a save.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error (text encoding, region bounds).
    #[error("{0}")]
    Common(#[from] arf_common::Error),

    /// Malformed primary-key table.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this error is a text field overflow.
    pub fn is_encoding_overflow(&self) -> bool {
        matches!(
            self,
            Error::Common(arf_common::Error::EncodingOverflow { .. })
        )
    }
}

/// Result type for attack record operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a primary-key lookup produced nothing.
///
/// Lookup failures never fail a record operation; they only leave the
/// record's primary key at its previous value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No lookup source is connected.
    #[error("primary key lookup unavailable")]
    Unavailable,

    /// The source has no row for this id and name.
    #[error("no primary key for attack {id} ({name:?})")]
    NotFound { id: u16, name: String },
}
