//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or whitespace-only.
    EmptyName,

    /// The provided phone number is not exactly 10 ASCII digits.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone format: '{}' (must be exactly 10 digits)",
                phone
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty");

        let err = ValidationError::InvalidPhone("12-34".to_string());
        assert!(err.to_string().contains("'12-34'"));
        assert!(err.to_string().contains("10 digits"));
    }
}
