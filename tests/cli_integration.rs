//! CLI integration tests for the contact book
//!
//! These drive the `contacts` binary through stdin, checking the replies
//! and what ends up in the snapshot file between runs.

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a command instance for the contacts binary
fn contacts_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("contacts"));
    cmd.env_remove("CONTACTS_FILE");
    cmd
}

/// A temp directory holding an empty config and the snapshot path
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        Self { dir }
    }

    fn book_path(&self) -> PathBuf {
        self.dir.path().join("addressbook.json")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// Runs one session feeding `lines` on stdin
    fn session(&self, lines: &[&str]) -> assert_cmd::assert::Assert {
        let mut input = lines.join("\n");
        input.push('\n');

        contacts_cmd()
            .current_dir(self.dir.path())
            .arg("--file")
            .arg(self.book_path())
            .arg("--config")
            .arg(self.config_path())
            .write_stdin(input)
            .assert()
    }
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_welcome_and_menu() {
    let ws = Workspace::new();

    ws.session(&["close"])
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("add-birthday <name> <DD.MM.YYYY>"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_hello_and_invalid_command() {
    let ws = Workspace::new();

    ws.session(&["hello", "dance", "exit"])
        .success()
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Invalid command."));
}

#[test]
fn test_close_saves_snapshot() {
    let ws = Workspace::new();

    ws.session(&["add John 1234567890", "close"])
        .success()
        .stdout(predicate::str::contains("Contact added."));

    let content = fs::read_to_string(ws.book_path()).unwrap();
    assert!(content.contains("\"John\""));
    assert!(content.contains("\"1234567890\""));
}

#[test]
fn test_end_of_input_exits_without_saving() {
    let ws = Workspace::new();

    ws.session(&["add John 1234567890"])
        .success()
        .stderr(predicate::str::contains("not written"));

    assert!(!ws.book_path().exists());
}

#[test]
fn test_invalid_utf8_line_does_not_end_session() {
    let ws = Workspace::new();

    contacts_cmd()
        .arg("--file")
        .arg(ws.book_path())
        .arg("--config")
        .arg(ws.config_path())
        .write_stdin(b"add John 1234567890\nadd Jane \xff\xfe\nclose\n".as_slice())
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone must be 10 digits"))
        .stdout(predicate::str::contains("Good bye!"));

    let content = fs::read_to_string(ws.book_path()).unwrap();
    assert!(content.contains("\"John\""));
    assert!(!content.contains("Jane"));
}

#[cfg(unix)]
#[test]
fn test_ctrl_c_exits_cleanly_without_saving() {
    use std::io::{Read, Write};
    use std::process::{Command, Stdio};

    let ws = Workspace::new();

    let mut child = Command::new(assert_cmd::cargo::cargo_bin!("contacts"))
        .env_remove("CONTACTS_FILE")
        .arg("--file")
        .arg(ws.book_path())
        .arg("--config")
        .arg(ws.config_path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Stdin stays open, so only the signal can end the session
    let mut stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();
    stdin.write_all(b"add John 1234567890\n").unwrap();
    stdin.flush().unwrap();

    // The second prompt means the handler is installed and the add was handled
    let mut seen = Vec::new();
    let mut chunk = [0u8; 256];
    while String::from_utf8_lossy(&seen).matches("Enter a command: ").count() < 2 {
        let n = stdout.read(&mut chunk).unwrap();
        assert!(n > 0, "contacts exited early");
        seen.extend_from_slice(&chunk[..n]);
    }

    let killed = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .unwrap();
    assert!(killed.success());

    let status = child.wait().unwrap();
    let mut stderr = String::new();
    child.stderr.take().unwrap().read_to_string(&mut stderr).unwrap();
    drop(stdin);

    assert_eq!(status.code(), Some(0));
    assert!(stderr.contains("not written"));
    assert!(!ws.book_path().exists());
}

// =============================================================================
// Command Tests
// =============================================================================

#[test]
fn test_birthday_scenario() {
    let ws = Workspace::new();

    ws.session(&[
        "add John 1234567890",
        "add-birthday John 05.06.2024",
        "show-birthday John",
        "close",
    ])
    .success()
    .stdout(predicate::str::contains("Birthday added to contact - John"))
    .stdout(predicate::str::contains("05.06.2024"));
}

#[test]
fn test_change_scenario() {
    let ws = Workspace::new();

    ws.session(&[
        "add John 1234567890",
        "change John 1234567890 0987654321",
        "phone John",
        "close",
    ])
    .success()
    .stdout(predicate::str::contains("Contact updated"))
    .stdout(predicate::str::contains("0987654321"));
}

#[test]
fn test_unknown_contact() {
    let ws = Workspace::new();

    ws.session(&["show-birthday Unknown", "close"])
        .success()
        .stdout(predicate::str::contains("Contact not found"));
}

#[test]
fn test_validation_messages() {
    let ws = Workspace::new();

    ws.session(&[
        "add John 12345",
        "add John",
        "add John 1234567890",
        "add-birthday John 2024-06-05",
        "close",
    ])
    .success()
    .stdout(predicate::str::contains("Phone must be 10 digits"))
    .stdout(predicate::str::contains("Give me name and phone"))
    .stdout(predicate::str::contains("Invalid date format. Use DD.MM.YYYY"));
}

#[test]
fn test_birthdays_none_upcoming() {
    let ws = Workspace::new();

    ws.session(&["add John 1234567890", "birthdays", "close"])
        .success()
        .stdout(predicate::str::contains("No birthdays will be in next 7 days"));
}

#[test]
fn test_config_window_days() {
    let ws = Workspace::new();
    fs::write(ws.config_path(), "[birthdays]\nwindow_days = 3\n").unwrap();

    ws.session(&["birthdays", "close"])
        .success()
        .stdout(predicate::str::contains("No birthdays will be in next 3 days"));
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_data_survives_restart() {
    let ws = Workspace::new();

    ws.session(&[
        "add John 1234567890",
        "add John 0987654321",
        "add-birthday John 05.06.1990",
        "add Jane 1111111111",
        "close",
    ])
    .success();

    ws.session(&["all", "close"])
        .success()
        .stdout(predicate::str::contains(
            "Contact name: John, phones: 1234567890; 0987654321, birthday: 05.06.1990\n\
             Contact name: Jane, phones: 1111111111, birthday: Not set",
        ));
}

#[test]
fn test_delete_persists() {
    let ws = Workspace::new();

    ws.session(&["add John 1234567890", "add Jane 1111111111", "close"])
        .success();
    ws.session(&["delete John", "close"])
        .success()
        .stdout(predicate::str::contains("Contact deleted"));

    ws.session(&["phone John", "phone Jane", "close"])
        .success()
        .stdout(predicate::str::contains("Contact not found"))
        .stdout(predicate::str::contains("1111111111"));
}

#[test]
fn test_corrupted_snapshot_starts_empty() {
    let ws = Workspace::new();
    fs::write(ws.book_path(), "").unwrap();

    ws.session(&["all", "add John 1234567890", "close"])
        .success()
        .stdout(predicate::str::contains(
            "The file is empty or corrupted, no data could be loaded.",
        ))
        .stdout(predicate::str::contains("Contact added."));

    // The clean exit replaced the corrupted file
    ws.session(&["phone John", "close"])
        .success()
        .stdout(predicate::str::contains("1234567890"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let ws = Workspace::new();

    contacts_cmd()
        .arg("--file")
        .arg(ws.book_path())
        .arg("--config")
        .arg(ws.dir.path().join("nope.toml"))
        .write_stdin("close\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_file_from_env() {
    let ws = Workspace::new();

    contacts_cmd()
        .env("CONTACTS_FILE", ws.book_path())
        .arg("--config")
        .arg(ws.config_path())
        .write_stdin("add John 1234567890\nclose\n")
        .assert()
        .success();

    assert!(ws.book_path().exists());
}
