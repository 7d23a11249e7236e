//! Confirmation values returned by mutating operations.
//!
//! Each variant renders as a human-readable message through `Display`.
//! Callers that need to branch on the outcome should match on the variant.

use crate::domain::{Name, Phone};
use serde::Serialize;
use std::fmt;

/// Outcome of a phone-list operation on a [`Record`](super::Record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecordUpdate {
    /// The phone was appended to the record.
    PhoneAdded { phone: Phone },

    /// The phone was already on the record; nothing changed.
    PhoneAlreadyPresent { phone: Phone },

    /// The phone was removed from the record.
    PhoneRemoved { phone: Phone },

    /// `old` was replaced by `new` at the same position.
    PhoneChanged { old: Phone, new: Phone },
}

impl RecordUpdate {
    /// Whether the record's phone list was modified.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::PhoneAlreadyPresent { .. })
    }
}

impl fmt::Display for RecordUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PhoneAdded { phone } => write!(f, "Phone number {} added to contact", phone),
            Self::PhoneAlreadyPresent { .. } => write!(f, "Phone number already exists in contact"),
            Self::PhoneRemoved { phone } => {
                write!(f, "Phone number {} removed from contact", phone)
            }
            Self::PhoneChanged { old, new } => {
                write!(f, "Phone number {} changed to {}", old, new)
            }
        }
    }
}

/// Outcome of an [`AddressBook`](super::AddressBook) operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BookUpdate {
    /// A record was stored under a new name.
    RecordAdded { name: Name },

    /// A record replaced an existing one with the same name.
    RecordReplaced { name: Name },

    /// The record stored under `name` was removed.
    RecordDeleted { name: Name },

    /// No record is stored under `name`. Carries the trimmed lookup key,
    /// which may be empty.
    RecordNotFound { name: String },
}

impl fmt::Display for BookUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecordAdded { name } => write!(f, "Record for {} added to address book", name),
            Self::RecordReplaced { name } => {
                write!(f, "Record for {} replaced in address book", name)
            }
            Self::RecordDeleted { name } => {
                write!(f, "Record for {} deleted from address book", name)
            }
            Self::RecordNotFound { name } => write!(f, "No record for {} in address book", name),
        }
    }
}
