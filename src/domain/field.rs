//! Generic validated string field.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

/// A format rule enforced by a [`Field`].
///
/// Implementors are zero-sized marker types. `normalize` receives the raw
/// caller input and returns the value to store, or the reason it was rejected.
pub trait Constraint {
    /// Name used in `Debug` output.
    const NAME: &'static str;

    /// Validate `raw` and return its normalized form.
    fn normalize(raw: &str) -> Result<String, ValidationError>;
}

/// An immutable string whose contents satisfy the constraint `C`.
///
/// The only way to obtain a `Field` is through [`Field::new`] (or the
/// `FromStr`/`TryFrom`/`Deserialize` impls, which call it), so holding one
/// is proof that the value passed validation.
///
/// # Example
///
/// ```
/// use address_book::domain::{Name, Phone};
///
/// let name = Name::new("  John ").unwrap();
/// assert_eq!(name.as_str(), "John");
///
/// assert!(Phone::new("555-1234").is_err());
/// ```
pub struct Field<C> {
    value: String,
    _constraint: PhantomData<fn() -> C>,
}

impl<C: Constraint> Field<C> {
    /// Create a new field, validating and normalizing `raw`.
    ///
    /// # Errors
    ///
    /// Returns the constraint's `ValidationError` if `raw` is rejected.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = C::normalize(raw.as_ref())?;
        Ok(Self {
            value,
            _constraint: PhantomData,
        })
    }
}

impl<C> Field<C> {
    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

// Manual impls so the marker type needs no bounds of its own.

impl<C> Clone for Field<C> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _constraint: PhantomData,
        }
    }
}

impl<C> PartialEq for Field<C> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<C> Eq for Field<C> {}

impl<C> Hash for Field<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<C: Constraint> fmt::Debug for Field<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(C::NAME).field(&self.value).finish()
    }
}

// Display support
impl<C> fmt::Display for Field<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<C> AsRef<str> for Field<C> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<C: Constraint> FromStr for Field<C> {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<C: Constraint> TryFrom<&str> for Field<C> {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<C: Constraint> TryFrom<String> for Field<C> {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Serde support - serialize as string
impl<C> Serialize for Field<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de, C: Constraint> Deserialize<'de> for Field<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
