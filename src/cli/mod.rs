//! # Command-Line Interface
//!
//! The interactive session, its commands and the start-up/shutdown plumbing.
//!
//! ## Commands
//!
//! | Group | Commands |
//! |-------|----------|
//! | Contacts | `add`, `change`, `remove-phone`, `phone`, `delete`, `all` |
//! | Birthdays | `add-birthday`, `show-birthday`, `birthdays` |
//! | Session | `hello`, `help`, `close`, `exit` |
//!
//! Input is split on whitespace; the first token (case-insensitive) is the
//! command, the rest are its arguments.
//!
//! ## Lifecycle
//!
//! 1. Load configuration and the address book snapshot
//! 2. Run the [`Session`] loop over a [`UserView`]
//! 3. On `close`/`exit` save the snapshot; on end of input exit without saving
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! contacts --verbose --file ~/contacts.json
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the session.

mod app;
mod output;
mod view;
mod command;
mod handlers;
mod session;

pub use app::{load_book, run, Cli, CORRUPTED_SNAPSHOT_MESSAGE};
pub use command::{execute, parse_input, Command, Reply, MENU};
pub use handlers::{CommandError, Context};
pub use output::Output;
pub use session::{local_today, Session, SessionEnd};
pub use view::{ConsoleView, ScriptedView, UserView};
