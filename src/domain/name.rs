//! Contact name value object.

use super::errors::ValidationError;
use super::field::{Constraint, Field};

/// Constraint for contact names: non-empty after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRule;

impl Constraint for NameRule {
    const NAME: &'static str = "Name";

    fn normalize(raw: &str) -> Result<String, ValidationError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(name.to_string())
    }
}

/// A contact name, stored trimmed and never empty.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("  Jane Doe  ").unwrap();
/// assert_eq!(name.as_str(), "Jane Doe");
/// assert!(Name::new("   ").is_err());
/// ```
pub type Name = Field<NameRule>;
