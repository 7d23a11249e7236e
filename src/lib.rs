//! Address Book - an in-memory contact directory with validated fields.
//!
//! Contacts are stored as [`Record`]s, each holding a [`Name`](domain::Name) and an
//! ordered list of unique [`Phone`](domain::Phone) numbers. Records live in an
//! [`AddressBook`] keyed by the contact's trimmed name.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Field`, `Name`, `Phone`) and their errors
//! - **models**: `Record`, `AddressBook` and the confirmations their operations return
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration for the demo binary, read from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut john = Record::new("John").unwrap();
//! john.add_phone("1234567890").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(john);
//!
//! let john = book.find_mut("John").unwrap();
//! john.edit_phone("1234567890", "1112223333").unwrap();
//! assert_eq!(john.to_string(), "Contact name: John, phones: 1112223333");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::{Config, OutputFormat};
pub use domain::{Name, Phone, ValidationError};
pub use error::{ConfigError, RecordError, RecordResult};
pub use models::{AddressBook, BookUpdate, Record, RecordUpdate};
