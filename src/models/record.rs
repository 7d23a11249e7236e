//! Record model: a named contact and its phone numbers.

use super::update::RecordUpdate;
use crate::domain::{Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::Serialize;
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at construction. Phones keep insertion order and never
/// contain two entries with the same value; uniqueness is checked with a
/// linear scan, which is fine for the handful of numbers a contact has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    /// Create a record and add each phone in order.
    ///
    /// Duplicates are collapsed the same way [`Record::add_phone`] does.
    pub fn with_phones<I, S>(name: impl AsRef<str>, phones: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = Self::new(name)?;
        for phone in phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Append a phone unless an equal one is already present.
    ///
    /// A duplicate is not an error: the list is left unchanged and
    /// `RecordUpdate::PhoneAlreadyPresent` is returned.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` is not 10 digits.
    pub fn add_phone(&mut self, raw: impl AsRef<str>) -> Result<RecordUpdate, ValidationError> {
        let phone = Phone::new(raw)?;

        if self.position(phone.as_str()).is_some() {
            tracing::debug!(contact = %self.name, phone = %phone, "Phone already on record");
            return Ok(RecordUpdate::PhoneAlreadyPresent { phone });
        }

        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone.clone());
        Ok(RecordUpdate::PhoneAdded { phone })
    }

    /// Remove the phone matching `raw` (after trimming).
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, raw: impl AsRef<str>) -> RecordResult<RecordUpdate> {
        let target = raw.as_ref().trim();
        let index = self
            .position(target)
            .ok_or_else(|| RecordError::PhoneNotFound(target.to_string()))?;

        let phone = self.phones.remove(index);
        tracing::debug!(contact = %self.name, phone = %phone, "Removed phone");
        Ok(RecordUpdate::PhoneRemoved { phone })
    }

    /// Replace the phone matching `old` with `new`, keeping its position.
    ///
    /// `new` is only validated once `old` has been found. If `new` is already
    /// on the record under a different entry, the `old` entry is dropped so
    /// the list stays free of duplicates.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if `old` is not on the record
    /// - `RecordError::Validation` if `new` is not a valid phone
    pub fn edit_phone(
        &mut self,
        old: impl AsRef<str>,
        new: impl AsRef<str>,
    ) -> RecordResult<RecordUpdate> {
        let target = old.as_ref().trim();
        let index = self
            .position(target)
            .ok_or_else(|| RecordError::PhoneNotFound(target.to_string()))?;

        let new_phone = Phone::new(new)?;

        let old_phone = match self.position(new_phone.as_str()) {
            Some(existing) if existing != index => self.phones.remove(index),
            _ => std::mem::replace(&mut self.phones[index], new_phone.clone()),
        };

        tracing::debug!(
            contact = %self.name,
            old = %old_phone,
            new = %new_phone,
            "Changed phone"
        );
        Ok(RecordUpdate::PhoneChanged {
            old: old_phone,
            new: new_phone,
        })
    }

    /// Look up the phone matching `raw` (after trimming).
    ///
    /// Returns `None` when absent; invalid input simply matches nothing.
    pub fn find_phone(&self, raw: impl AsRef<str>) -> Option<&Phone> {
        let target = raw.as_ref().trim();
        self.phones.iter().find(|p| p.as_str() == target)
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
