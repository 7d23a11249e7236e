//! Records, the address book that owns them, and the confirmations their
//! operations return.

pub mod address_book;
pub mod record;
pub mod update;

pub use address_book::AddressBook;
pub use record::Record;
pub use update::{BookUpdate, RecordUpdate};
