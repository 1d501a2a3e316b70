//! Command handlers
//!
//! Each handler takes the command's argument tokens and the address book and
//! returns the reply text. Failures are returned as [`CommandError`] and turned
//! into messages by [`super::command::execute`].

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{AddressBook, BookError, FieldError, Phone, Record, RecordError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A phone number, birthday or name failed validation
    #[error(transparent)]
    Validation(#[from] FieldError),

    /// The named contact or phone does not exist
    #[error("{0}")]
    NotFound(&'static str),

    /// Wrong number of arguments; carries the usage hint
    #[error("{0}")]
    ArgumentCount(&'static str),
}

const CONTACT_NOT_FOUND: &str = "Contact not found";
const PHONE_NOT_FOUND: &str = "Phone number not found";

impl From<RecordError> for CommandError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Invalid(e) => CommandError::Validation(e),
            RecordError::PhoneNotFound(_) => CommandError::NotFound(PHONE_NOT_FOUND),
        }
    }
}

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(_) => CommandError::NotFound(CONTACT_NOT_FOUND),
        }
    }
}

pub type HandlerResult = Result<String, CommandError>;

/// Values a handler may need besides its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Reference date for birthday queries
    pub today: NaiveDate,
    /// Inclusive window for upcoming birthdays
    pub window_days: u32,
}

/// Destructures `args` into exactly `N` tokens or fails with `usage`
fn expect_args<'a, const N: usize>(
    args: &[&'a str],
    usage: &'static str,
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::ArgumentCount(usage))
}

fn find<'b>(book: &'b AddressBook, name: &str) -> Result<&'b Record, CommandError> {
    book.find(name).ok_or(CommandError::NotFound(CONTACT_NOT_FOUND))
}

fn find_mut<'b>(book: &'b mut AddressBook, name: &str) -> Result<&'b mut Record, CommandError> {
    book.find_mut(name)
        .ok_or(CommandError::NotFound(CONTACT_NOT_FOUND))
}

/// `add <name> <phone>`: creates the contact or appends a phone to it
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> HandlerResult {
    let [name, phone] = expect_args::<2>(args, "Give me name and phone")?;

    // Validate before touching the book so a bad phone creates nothing
    phone.parse::<Phone>()?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name.parse()?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> HandlerResult {
    let [name, old_phone, new_phone] =
        expect_args::<3>(args, "Give me name, old phone and new phone")?;

    find_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated".to_string())
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> HandlerResult {
    let [name, phone] = expect_args::<2>(args, "Give me name and phone")?;

    find_mut(book, name)?.remove_phone(phone)?;
    Ok("Phone removed".to_string())
}

/// `phone <name>`: the contact's phones joined with commas
pub fn show_phone(args: &[&str], book: &AddressBook) -> HandlerResult {
    let [name] = expect_args::<1>(args, "Give me name")?;

    let phones: Vec<&str> = find(book, name)?.phones().iter().map(Phone::as_str).collect();
    Ok(phones.join(","))
}

/// `delete <name>`
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> HandlerResult {
    let [name] = expect_args::<1>(args, "Give me name")?;

    book.delete(name)?;
    Ok("Contact deleted".to_string())
}

/// `all`: every contact, one per line
pub fn show_all(book: &AddressBook) -> HandlerResult {
    if book.is_empty() {
        return Ok("All contacts are:".to_string());
    }
    Ok(format!("All contacts are:\n{}", book))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> HandlerResult {
    let [name, date] = expect_args::<2>(args, "Give me name and birthday")?;

    find_mut(book, name)?.set_birthday(date)?;
    Ok(format!("Birthday added to contact - {}", name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> HandlerResult {
    let [name] = expect_args::<1>(args, "Give me name")?;

    match find(book, name)?.birthday() {
        Some(birthday) => Ok(birthday.to_string()),
        None => Ok("Birthday is not set".to_string()),
    }
}

/// `birthdays`: contacts with a birthday in the configured window
pub fn birthdays(book: &AddressBook, ctx: &Context) -> HandlerResult {
    let upcoming = book.upcoming_birthdays(ctx.today, ctx.window_days);
    if upcoming.is_empty() {
        return Ok(format!(
            "No birthdays will be in next {} days",
            ctx.window_days
        ));
    }

    let mut lines = vec![format!("Birthdays in next {} days:", ctx.window_days)];
    lines.extend(upcoming.iter().map(ToString::to_string));
    Ok(lines.join("\n"))
}
