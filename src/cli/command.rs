//! Command parsing and dispatch

use std::fmt;

use super::handlers::{self, Context, HandlerResult};
use crate::domain::AddressBook;

/// Menu shown at start-up and by `help`
pub const MENU: &[&str] = &[
    "hello - greet the bot",
    "add <name> <phone> - add a contact or a phone to it",
    "change <name> <old phone> <new phone> - replace a phone",
    "remove-phone <name> <phone> - remove a phone",
    "phone <name> - show phones",
    "delete <name> - delete a contact",
    "all - show the address book",
    "add-birthday <name> <DD.MM.YYYY> - set a birthday",
    "show-birthday <name> - show a birthday",
    "birthdays - show birthdays in the coming days",
    "help - show this menu",
    "close | exit - save and quit",
];

/// A recognized command name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    RemovePhone,
    Phone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Close,
    Unknown,
}

impl Command {
    /// Looks up a command by its (already lower-cased) name
    pub fn from_name(name: &str) -> Self {
        match name {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "remove-phone" => Command::RemovePhone,
            "phone" => Command::Phone,
            "delete" => Command::Delete,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "help" => Command::Help,
            "close" | "exit" => Command::Close,
            _ => Command::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::RemovePhone => "remove-phone",
            Command::Phone => "phone",
            Command::Delete => "delete",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Help => "help",
            Command::Close => "close",
            Command::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits an input line into a command and its arguments
///
/// The first whitespace-separated token, lower-cased, names the command.
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(Command, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    Some((Command::from_name(&name), tokens.collect()))
}

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the message and keep reading
    Continue(String),
    /// Show the message, then save and stop
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Reply::Continue(m) | Reply::Exit(m) => m,
        }
    }
}

/// Runs one command against the book
///
/// Handler failures become their message here; nothing is propagated.
pub fn execute(command: Command, args: &[&str], book: &mut AddressBook, ctx: &Context) -> Reply {
    let result: HandlerResult = match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => handlers::add_contact(args, book),
        Command::Change => handlers::change_contact(args, book),
        Command::RemovePhone => handlers::remove_phone(args, book),
        Command::Phone => handlers::show_phone(args, book),
        Command::Delete => handlers::delete_contact(args, book),
        Command::All => handlers::show_all(book),
        Command::AddBirthday => handlers::add_birthday(args, book),
        Command::ShowBirthday => handlers::show_birthday(args, book),
        Command::Birthdays => handlers::birthdays(book, ctx),
        Command::Help => Ok(MENU.join("\n")),
        Command::Close => return Reply::Exit("Good bye!".to_string()),
        Command::Unknown => Ok("Invalid command.".to_string()),
    };

    Reply::Continue(result.unwrap_or_else(|e| e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> Context {
        Context {
            today: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            window_days: 7,
        }
    }

    fn run(line: &str, book: &mut AddressBook) -> Reply {
        let (command, args) = parse_input(line).unwrap();
        execute(command, &args, book, &ctx())
    }

    #[test]
    fn parse_lowercases_command_only() {
        let (command, args) = parse_input("  ADD-Birthday  John  05.06.2024 ").unwrap();
        assert_eq!(command, Command::AddBirthday);
        assert_eq!(args, vec!["John", "05.06.2024"]);

        let (command, args) = parse_input("add JOHN 1234567890").unwrap();
        assert_eq!(command, Command::Add);
        assert_eq!(args, vec!["JOHN", "1234567890"]);
    }

    #[test]
    fn parse_blank_line() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   \t "), None);
    }

    #[test]
    fn close_and_exit_are_aliases() {
        assert_eq!(Command::from_name("close"), Command::Close);
        assert_eq!(Command::from_name("exit"), Command::Close);

        let mut book = AddressBook::new();
        assert_eq!(run("exit", &mut book), Reply::Exit("Good bye!".to_string()));
    }

    #[test]
    fn unknown_command() {
        let mut book = AddressBook::new();
        let reply = run("frobnicate now", &mut book);
        assert_eq!(reply, Reply::Continue("Invalid command.".to_string()));
    }

    #[test]
    fn command_names_roundtrip() {
        for command in [
            Command::Hello,
            Command::Add,
            Command::Change,
            Command::RemovePhone,
            Command::Phone,
            Command::Delete,
            Command::All,
            Command::AddBirthday,
            Command::ShowBirthday,
            Command::Birthdays,
            Command::Help,
            Command::Close,
        ] {
            assert_eq!(Command::from_name(command.as_str()), command);
        }
    }

    #[test]
    fn errors_become_messages() {
        let mut book = AddressBook::new();
        assert_eq!(
            run("show-birthday Unknown", &mut book).message(),
            "Contact not found"
        );
        assert_eq!(run("add John", &mut book).message(), "Give me name and phone");
        assert_eq!(
            run("add John 12", &mut book).message(),
            "Phone must be 10 digits"
        );
    }

    #[test]
    fn birthday_scenario() {
        let mut book = AddressBook::new();
        run("add John 1234567890", &mut book);
        run("add-birthday John 05.06.2024", &mut book);
        assert_eq!(
            run("show-birthday John", &mut book),
            Reply::Continue("05.06.2024".to_string())
        );
    }

    #[test]
    fn change_scenario() {
        let mut book = AddressBook::new();
        run("add John 1234567890", &mut book);
        run("change John 1234567890 0987654321", &mut book);
        assert_eq!(
            run("phone John", &mut book),
            Reply::Continue("0987654321".to_string())
        );
    }

    #[test]
    fn help_lists_menu() {
        let mut book = AddressBook::new();
        let reply = run("help", &mut book);
        assert!(reply.message().contains("add-birthday"));
        assert_eq!(reply.message().lines().count(), MENU.len());
    }
}
