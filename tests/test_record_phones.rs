//! Integration tests for validated fields and Record phone operations.

mod common;

use address_book::domain::{Name, Phone};
use address_book::{Record, RecordError, RecordUpdate, ValidationError};
use common::{fixtures::*, phone_values};

#[test]
fn test_valid_phones_store_trimmed_value() {
    for raw in VALID_PHONES {
        let phone = Phone::new(raw).unwrap_or_else(|e| panic!("{:?} rejected: {}", raw, e));
        assert_eq!(phone.as_str(), raw.trim());
    }
}

#[test]
fn test_invalid_phones_are_rejected() {
    for raw in INVALID_PHONES {
        match Phone::new(raw) {
            Err(ValidationError::InvalidPhone(_)) => {}
            other => panic!("{:?} should be invalid, got {:?}", raw, other),
        }
    }
}

#[test]
fn test_names_trim_or_reject() {
    for raw in ["", " ", "\n\t"] {
        assert_eq!(Name::new(raw), Err(ValidationError::EmptyName));
    }
    for raw in ["John", " John", "John ", " Mary Ann "] {
        assert_eq!(Name::new(raw).unwrap().as_str(), raw.trim());
    }
}

#[test]
fn test_add_phone_is_idempotent() {
    for raw in VALID_PHONES {
        let mut record = Record::new("John").unwrap();
        let first = record.add_phone(raw).unwrap();
        let second = record.add_phone(raw.trim()).unwrap();

        assert!(first.is_change());
        assert!(!second.is_change());
        assert_ne!(first.to_string(), second.to_string());
        assert_eq!(phone_values(&record), [raw.trim()]);
    }
}

#[test]
fn test_edit_then_find_round_trip() {
    let mut record = sample_record("John", &["1234567890", "5555555555"]);

    let update = record.edit_phone("1234567890", "1112223333").unwrap();
    assert_eq!(
        update,
        RecordUpdate::PhoneChanged {
            old: Phone::new("1234567890").unwrap(),
            new: Phone::new("1112223333").unwrap(),
        }
    );

    assert!(record.find_phone("1112223333").is_some());
    assert!(record.find_phone("1234567890").is_none());
}

#[test]
fn test_remove_then_remove_again_fails() {
    let mut record = sample_record("John", &["1234567890"]);
    record.remove_phone("1234567890").unwrap();

    let err = record.remove_phone("1234567890").unwrap_err();
    assert_eq!(err, RecordError::PhoneNotFound("1234567890".to_string()));
    assert_eq!(
        err.to_string(),
        "Phone number 1234567890 not found in contact"
    );
}

#[test]
fn test_edit_errors_leave_record_unchanged() {
    let mut record = sample_record("John", &["1234567890", "5555555555"]);
    let before = record.clone();

    assert!(matches!(
        record.edit_phone("0000000000", "1112223333"),
        Err(RecordError::PhoneNotFound(_))
    ));
    assert!(matches!(
        record.edit_phone("1234567890", "111222333"),
        Err(RecordError::Validation(_))
    ));
    assert_eq!(record, before);
}

#[test]
fn test_with_phones_collapses_duplicates() {
    let record = sample_record("John", &["1234567890", " 1234567890", "5555555555"]);
    assert_eq!(phone_values(&record), ["1234567890", "5555555555"]);
}

#[test]
fn test_with_phones_propagates_first_invalid_phone() {
    let result = Record::with_phones("John", ["1234567890", "nope", "12"]);
    assert_eq!(
        result,
        Err(ValidationError::InvalidPhone("nope".to_string()))
    );
}
