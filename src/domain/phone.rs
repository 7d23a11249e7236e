//! Phone number value object.

use super::errors::ValidationError;
use super::field::{Constraint, Field};
use once_cell::sync::Lazy;
use regex::Regex;

// Ten ASCII digits, nothing else. `\d` would also match non-ASCII digits.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// Constraint for phone numbers: exactly 10 ASCII digits after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneRule;

impl Constraint for PhoneRule {
    const NAME: &'static str = "Phone";

    fn normalize(raw: &str) -> Result<String, ValidationError> {
        let phone = raw.trim();
        if !PHONE_PATTERN.is_match(phone) {
            return Err(ValidationError::InvalidPhone(phone.to_string()));
        }
        Ok(phone.to_string())
    }
}

/// A phone number of exactly 10 decimal digits.
///
/// Separators, country codes and extensions are rejected rather than
/// stripped, so two `Phone` values are equal exactly when their digits are.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new(" 1234567890 ").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(Phone::new("123-456-7890").is_err());
/// ```
pub type Phone = Field<PhoneRule>;
