//! Storage-specific error types for file operations.
//!
//! These errors are internal to the storage layer and are converted to
//! `nextgoal_core::Error` before being returned to callers.

use nextgoal_core::errors::Error;
use thiserror::Error;

/// Storage-specific errors that wrap I/O and JSON failures.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tempfile::PersistError> for StorageError {
    fn from(err: tempfile::PersistError) -> Self {
        StorageError::Io(err.error)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Error::Storage(err.to_string())
    }
}
