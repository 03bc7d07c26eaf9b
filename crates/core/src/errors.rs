//! Core error types for the NextGoal planner.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (I/O, JSON encoding) are converted to these types by the storage layer.

use thiserror::Error;
use uuid::Uuid;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the planner.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Goal not found: {0}")]
    GoalNotFound(Uuid),

    #[error("Storage operation failed: {0}")]
    Storage(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Amount for '{field}' must be greater than zero")]
    NonPositiveAmount { field: &'static str },

    #[error("Amount for '{field}' is too large")]
    AmountTooLarge { field: &'static str },

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}
