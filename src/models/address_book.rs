//! Address book: records keyed by contact name.

use super::record::Record;
use super::update::BookUpdate;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::HashMap;

/// The directory of contacts.
///
/// Each record is stored under its own trimmed name, and only the operations
/// below can change the contents, so a key always matches its record's name.
/// Iteration follows insertion order; replacing a record keeps its slot.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) -> BookUpdate {
        let name = record.name().clone();
        let key = name.as_str().to_string();

        match self.records.insert(key.clone(), record) {
            Some(_) => {
                tracing::info!(contact = %name, "Replaced record");
                BookUpdate::RecordReplaced { name }
            }
            None => {
                tracing::info!(contact = %name, "Added record");
                self.order.push(key);
                BookUpdate::RecordAdded { name }
            }
        }
    }

    /// Remove the record stored under `name` (after trimming).
    ///
    /// A missing record is reported through `BookUpdate::RecordNotFound`,
    /// not as an error.
    pub fn delete(&mut self, name: &str) -> BookUpdate {
        let key = name.trim();

        match self.records.remove(key) {
            Some(record) => {
                self.order.retain(|k| k != key);
                tracing::info!(contact = %record.name(), "Deleted record");
                BookUpdate::RecordDeleted {
                    name: record.name().clone(),
                }
            }
            None => {
                tracing::debug!(contact = %key, "No record to delete");
                BookUpdate::RecordNotFound {
                    name: key.to_string(),
                }
            }
        }
    }

    /// Look up the record stored under `name` (after trimming).
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name.trim())
    }

    /// Look up the record stored under `name` for editing its phones.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name.trim())
    }

    /// Whether a record is stored under `name` (after trimming).
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name.trim())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the address book is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            keys: self.order.iter(),
            records: &self.records,
        }
    }
}

/// Iterator over an [`AddressBook`] in insertion order.
pub struct Iter<'a> {
    keys: std::slice::Iter<'a, String>,
    records: &'a HashMap<String, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.records
            .get_key_value(key)
            .map(|(k, record)| (k.as_str(), record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a str, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Serializes as a list of records in insertion order.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for (_, record) in self {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}
