//! Contact book - an interactive command-line address book
//!
//! Stores names, phone numbers and birthdays, persists them between runs
//! as a JSON snapshot, and answers lookups and upcoming-birthday queries.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{AddressBook, Birthday, Name, Phone, Record, UpcomingBirthday};
