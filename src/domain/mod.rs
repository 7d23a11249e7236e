//! Domain value objects and types.
//!
//! This module contains the validated field wrapper and its two concrete
//! instances, contact names and phone numbers. Values are validated at
//! construction time, so an invalid name or phone can never be represented.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::{Constraint, Field};
pub use name::{Name, NameRule};
pub use phone::{Phone, PhoneRule};
