//! Address book domain model
//!
//! The book maps contact names to records, keeping insertion order so that
//! listings are stable between runs.

use chrono::{Datelike, Duration, NaiveDate};
use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;

use super::field::{Name, BIRTHDAY_FORMAT};
use super::record::Record;

/// Default window for [`AddressBook::upcoming_birthdays`]
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Contact not found")]
    NotFound(String),
}

/// A contact whose birthday falls inside the queried window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    /// The birthday's next occurrence on or after the reference date
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(BIRTHDAY_FORMAT))
    }
}

/// Collection of records keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<Name, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any record with the same name
    ///
    /// A replaced record keeps its original position.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().clone(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes a record by name, keeping the order of the others
    pub fn delete(&mut self, name: &str) -> Result<Record, BookError> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.records.keys()
    }

    /// Returns contacts whose birthday occurs within `window_days` of `reference`
    ///
    /// The window is inclusive on both ends. A birthday already past this year
    /// is checked against next year's occurrence, so windows spanning New Year
    /// work. Results follow book order.
    pub fn upcoming_birthdays(
        &self,
        reference: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let end = reference + Duration::days(i64::from(window_days));

        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let this_year = birthday.occurrence_in(reference.year())?;
                let date = if this_year < reference {
                    birthday.occurrence_in(reference.year() + 1)?
                } else {
                    this_year
                };
                (date <= end).then(|| UpcomingBirthday {
                    name: record.name().clone(),
                    date,
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, Name, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
