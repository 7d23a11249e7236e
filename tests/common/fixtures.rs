//! Sample data for integration tests.

#![allow(dead_code)]

use address_book::{AddressBook, Record};

/// Strings that trim to exactly ten ASCII digits.
pub const VALID_PHONES: &[&str] = &[
    "1234567890",
    "0000000000",
    "9999999999",
    " 5555555555",
    "5555555555 ",
    "\t1112223333\n",
];

/// Strings that must never become a phone.
pub const INVALID_PHONES: &[&str] = &[
    "",
    "   ",
    "123456789",
    "12345678901",
    "123-456-7890",
    "(123) 456-7890",
    "+1234567890",
    "123 456 7890",
    "12345678a0",
    "１２３４５６７８９０",
];

/// Create a record with the given phones, panicking on invalid input.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    Record::with_phones(name, phones.iter().copied()).expect("fixture record is valid")
}

/// The John/Jane book used by the walkthrough scenario.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890", "5555555555"]));
    book.add_record(sample_record("Jane", &["9876543210"]));
    book
}
