//! Domain models for the contact book
//!
//! Contains the core data model and queries without any I/O concerns.

mod field;
mod record;
mod book;

pub use field::{Birthday, FieldError, Name, Phone, BIRTHDAY_FORMAT};
pub use record::{Record, RecordError};
pub use book::{AddressBook, BookError, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
