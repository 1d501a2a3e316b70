//! Contact record domain model
//!
//! A record holds one person's name, phone numbers and optional birthday.
//! The name is fixed at creation since the address book keys records by it.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::field::{Birthday, FieldError, Name, Phone};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error(transparent)]
    Invalid(#[from] FieldError),

    #[error("Phone number not found")]
    PhoneNotFound(String),
}

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Creates a record with no phones and no birthday
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validates and appends a phone number
    pub fn add_phone(&mut self, number: &str) -> Result<(), FieldError> {
        let phone: Phone = number.parse()?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its position
    ///
    /// `old` is looked up before `new` is validated.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), RecordError> {
        let index = self
            .position_of(old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;
        self.phones[index] = new.parse()?;
        Ok(())
    }

    /// Removes the first phone equal to `number`
    pub fn remove_phone(&mut self, number: &str) -> Result<Phone, RecordError> {
        let index = self
            .position_of(number)
            .ok_or_else(|| RecordError::PhoneNotFound(number.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Returns the first phone equal to `number`
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Validates and sets the birthday, replacing any previous value
    pub fn set_birthday(&mut self, date: &str) -> Result<(), FieldError> {
        self.birthday = Some(date.parse()?);
        Ok(())
    }

    fn position_of(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == number)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        if self.phones.is_empty() {
            f.write_str("none")?;
        } else {
            let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
            f.write_str(&phones.join("; "))?;
        }
        match &self.birthday {
            Some(birthday) => write!(f, ", birthday: {}", birthday),
            None => f.write_str(", birthday: Not set"),
        }
    }
}
