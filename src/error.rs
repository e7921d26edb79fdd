//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by `ContactStore` operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Email failed the format check; nothing was added
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// Phone failed the format check; nothing was added
    #[error("Invalid phone format: {0}")]
    InvalidPhone(String),

    /// Entry number outside `1..=len`
    #[error("Invalid entry number {index} (address book has {len} entries)")]
    OutOfRange { index: usize, len: usize },

    /// Reading or writing the backing file failed, including malformed rows
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidEmail(email) => StoreError::InvalidEmail(email),
            ValidationError::InvalidPhone(phone) => StoreError::InvalidPhone(phone),
        }
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        StoreError::Io(err.into())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
