//! The interactive command loop

use std::io;

use chrono::{Local, NaiveDate};

use super::command::{execute, parse_input, Reply, MENU};
use super::handlers::Context;
use super::output::Output;
use super::view::UserView;
use crate::domain::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `close` or `exit`; the book should be saved
    Closed,
    /// Input ended or Ctrl-C was pressed; nothing is saved
    Interrupted,
}

/// Returns the local calendar date
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Read-dispatch-print loop over a [`UserView`]
pub struct Session<'a, V: UserView> {
    view: &'a mut V,
    output: &'a Output,
    prompt: String,
    window_days: u32,
    clock: fn() -> NaiveDate,
}

impl<'a, V: UserView> Session<'a, V> {
    pub fn new(view: &'a mut V, output: &'a Output) -> Self {
        Self {
            view,
            output,
            prompt: "Enter a command: ".to_string(),
            window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            clock: local_today,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    /// Replaces the source of "today" used by birthday queries
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Runs until `close`/`exit` or end of input
    pub fn run(&mut self, book: &mut AddressBook) -> io::Result<SessionEnd> {
        self.view.display("Welcome to the assistant bot!");
        self.view.display_menu(MENU);

        loop {
            let Some(line) = self.view.prompt(&self.prompt)? else {
                self.output.verbose("Input ended");
                return Ok(SessionEnd::Interrupted);
            };

            let Some((command, args)) = parse_input(&line) else {
                continue;
            };

            self.output
                .verbose_ctx(command.as_str(), &format!("args: {:?}", args));

            let ctx = Context {
                today: (self.clock)(),
                window_days: self.window_days,
            };

            match execute(command, &args, book, &ctx) {
                Reply::Continue(message) => self.view.display(&message),
                Reply::Exit(message) => {
                    self.view.display(&message);
                    return Ok(SessionEnd::Closed);
                }
            }
        }
    }
}
