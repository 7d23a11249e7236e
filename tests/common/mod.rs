//! Shared helpers for integration tests.

pub mod fixtures;

use address_book::{AddressBook, Record};

/// Collect a record's phones as plain strings, in order.
pub fn phone_values(record: &Record) -> Vec<String> {
    record
        .phones()
        .iter()
        .map(|p| p.as_str().to_string())
        .collect()
}

/// Collect an address book's keys in iteration order.
#[allow(dead_code)]
pub fn book_names(book: &AddressBook) -> Vec<String> {
    book.names().map(str::to_string).collect()
}

/// Assert that every key matches its record's name and no phone repeats.
#[allow(dead_code)]
pub fn assert_book_consistent(book: &AddressBook) {
    for (key, record) in book {
        assert_eq!(key, record.name().as_str(), "key must match record name");

        let phones = phone_values(record);
        for (i, phone) in phones.iter().enumerate() {
            assert!(
                !phones[i + 1..].contains(phone),
                "duplicate phone {} on {}",
                phone,
                key
            );
        }
    }
    assert_eq!(book.iter().count(), book.len());
}
