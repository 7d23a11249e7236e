//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Value-object validation failures live in [`crate::domain::ValidationError`] and are
//! wrapped here when they surface through a record operation.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when changing a record's phone list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A name or phone failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone to remove or edit is not on the record
    #[error("Phone number {0} not found in contact")]
    PhoneNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecordError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Phone number 1234567890 not found in contact");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_OUTPUT".to_string(),
            reason: "Must be one of: text, json".to_string(),
        };
        assert!(err.to_string().contains("ADDRESS_BOOK_OUTPUT"));
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: RecordError = ValidationError::EmptyName.into();
        assert_eq!(err.to_string(), ValidationError::EmptyName.to_string());
        assert!(matches!(err, RecordError::Validation(ValidationError::EmptyName)));
    }
}
