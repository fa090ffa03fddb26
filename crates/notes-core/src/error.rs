//! Error types for note store operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and decides which of them are fatal.

use thiserror::Error;

/// Result type alias for note store operations.
pub type Result<T> = std::result::Result<T, NotesError>;

/// Core error type for note store operations.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Position outside the current note sequence
    #[error("No note at position {position} (store holds {len} notes)")]
    Index { position: usize, len: usize },

    /// Persisted data is structurally invalid
    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// Cipher or crypto library failure
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Wrong password or tampered ciphertext
    #[error("Decryption failed: wrong password or corrupted note")]
    Decryption,

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backing file error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl NotesError {
    /// Whether this error leaves the process in a usable state.
    ///
    /// Only storage failures are treated as fatal by the CLI.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, NotesError::Storage(_))
    }
}

impl From<std::io::Error> for NotesError {
    fn from(err: std::io::Error) -> Self {
        NotesError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for NotesError {
    fn from(err: serde_json::Error) -> Self {
        NotesError::MalformedData(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_message() {
        let err = NotesError::Index {
            position: 4,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "No note at position 4 (store holds 2 notes)"
        );
    }

    #[test]
    fn test_only_storage_is_fatal() {
        assert!(NotesError::Decryption.is_recoverable());
        assert!(NotesError::MalformedData("x".into()).is_recoverable());
        assert!(!NotesError::Storage("disk full".into()).is_recoverable());
    }

    #[test]
    fn test_json_error_maps_to_malformed() {
        let err: NotesError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, NotesError::MalformedData(_)));
    }
}
