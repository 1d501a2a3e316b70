//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;

use super::output::Output;
use super::session::{Session, SessionEnd};
use super::view::{ConsoleView, UserView};
use crate::domain::AddressBook;
use crate::storage::{BookStore, Config};

/// Shown when the snapshot exists but cannot be read back
pub const CORRUPTED_SNAPSHOT_MESSAGE: &str =
    "The file is empty or corrupted, no data could be loaded.";

#[derive(Parser)]
#[command(name = "contacts")]
#[command(author, version, about = "Interactive contact book with birthday reminders")]
pub struct Cli {
    /// Address book file (overrides the config file)
    #[arg(long, env = "CONTACTS_FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose);

    output.verbose("Contact book starting");

    let config = Config::load(cli.config.as_deref())?;
    let path = cli.file.unwrap_or_else(|| config.storage.file.clone());
    let store = BookStore::new(path);
    output.verbose_ctx("storage", &format!("Using {}", store.path().display()));

    let mut view = ConsoleView::new().context("Failed to install the Ctrl-C handler")?;
    let mut book = load_book(&store, &mut view, &output)?;
    output.verbose_ctx("storage", &format!("Loaded {} contact(s)", book.len()));

    let end = Session::new(&mut view, &output)
        .with_prompt(config.prompt.clone())
        .with_window_days(config.birthdays.window_days)
        .run(&mut book)
        .context("Failed to read input")?;

    match end {
        SessionEnd::Closed => {
            store
                .save(&book)
                .with_context(|| format!("Failed to save {}", store.path().display()))?;
            output.verbose_ctx("storage", &format!("Saved {} contact(s)", book.len()));
        }
        SessionEnd::Interrupted => {
            output.warn("Session interrupted; changes since the last save were not written");
        }
    }

    output.verbose("Session completed");
    Ok(())
}

/// Loads the book, falling back to an empty one when the snapshot is corrupted
pub fn load_book(store: &BookStore, view: &mut impl UserView, output: &Output) -> Result<AddressBook> {
    match store.load() {
        Ok(book) => Ok(book),
        Err(err) if err.is_corrupted() => {
            output.verbose_ctx("storage", &err.to_string());
            view.display(CORRUPTED_SNAPSHOT_MESSAGE);
            Ok(AddressBook::new())
        }
        Err(err) => Err(err).context("Failed to load address book"),
    }
}
