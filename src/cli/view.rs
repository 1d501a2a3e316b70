//! User interaction boundary
//!
//! The command loop only talks to a [`UserView`], so the interactive console
//! can be swapped for a scripted harness without touching command logic.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

/// Line-oriented user interaction
pub trait UserView {
    /// Shows `text` and reads one line of input
    ///
    /// Returns `Ok(None)` when input has ended.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>>;

    /// Shows a message
    fn display(&mut self, text: &str);

    /// Shows a list of menu entries, one per line
    fn display_menu(&mut self, lines: &[&str]) {
        for line in lines {
            self.display(line);
        }
    }
}

/// Console input, fed from the stdin reader thread and the Ctrl-C handler
#[derive(Debug)]
enum ConsoleEvent {
    Line(String),
    Closed,
    Interrupted,
    Failed(io::Error),
}

/// Interactive view over stdin/stdout
///
/// Lines are read on a separate thread so that Ctrl-C can end a blocked
/// prompt; the interrupt reaches the session as end of input.
#[derive(Debug)]
pub struct ConsoleView {
    rx: mpsc::Receiver<ConsoleEvent>,
}

impl ConsoleView {
    /// Starts the stdin reader and installs the Ctrl-C handler
    ///
    /// Fails if a Ctrl-C handler is already installed in this process.
    pub fn new() -> Result<Self, ctrlc::Error> {
        let (tx, rx) = mpsc::channel();

        let interrupt_tx = tx.clone();
        ctrlc::set_handler(move || {
            let _ = interrupt_tx.send(ConsoleEvent::Interrupted);
        })?;

        thread::spawn(move || read_lines(io::stdin().lock(), &tx));

        Ok(Self { rx })
    }
}

/// Forwards lines from `reader` until input ends or the receiver is gone
fn read_lines(mut reader: impl BufRead, tx: &mpsc::Sender<ConsoleEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let event = match reader.read_until(b'\n', &mut buf) {
            Ok(0) => ConsoleEvent::Closed,
            Ok(_) => ConsoleEvent::Line(decode_line(&buf)),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => ConsoleEvent::Failed(e),
        };

        let last = !matches!(event, ConsoleEvent::Line(_));
        if tx.send(event).is_err() || last {
            break;
        }
    }
}

/// Invalid UTF-8 is replaced rather than rejected, so one bad line
/// only fails its own command
fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches(['\r', '\n'])
        .to_string()
}

impl UserView for ConsoleView {
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", text)?;
        stdout.flush()?;

        match self.rx.recv() {
            Ok(ConsoleEvent::Line(line)) => Ok(Some(line)),
            Ok(ConsoleEvent::Interrupted) => {
                // Keep the shell prompt off the half-written line
                writeln!(stdout)?;
                Ok(None)
            }
            Ok(ConsoleEvent::Closed) | Err(mpsc::RecvError) => Ok(None),
            Ok(ConsoleEvent::Failed(e)) => Err(e),
        }
    }

    fn display(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Replays fixed input lines and records everything displayed
#[derive(Debug, Default)]
pub struct ScriptedView {
    input: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedView {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything displayed so far, one entry per `display` call
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// The most recent displayed message
    pub fn last(&self) -> Option<&str> {
        self.transcript.last().map(String::as_str)
    }
}

impl UserView for ScriptedView {
    fn prompt(&mut self, _text: &str) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn display(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}
