//! JSON snapshot storage for the address book
//!
//! The whole book is written as one JSON document on clean exit and read
//! back on start-up. Writes go to a temp file first and are renamed into
//! place, so a failed save never leaves a half-written snapshot behind.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{AddressBook, Record};

/// Current snapshot layout version
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Snapshot {path} is empty or corrupted: {reason}")]
    Corrupted { path: PathBuf, reason: String },

    #[error("Failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize address book: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    fn io<'a>(action: &'static str, path: &'a Path) -> impl FnOnce(std::io::Error) -> Self + 'a {
        move |source| StoreError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns true if the snapshot exists but could not be decoded
    pub fn is_corrupted(&self) -> bool {
        matches!(self, StoreError::Corrupted { .. })
    }
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Store for the address book snapshot
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    /// Creates a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Loads the address book
    ///
    /// A missing file yields an empty book. An empty or undecodable file is
    /// reported as [`StoreError::Corrupted`].
    pub fn load(&self) -> Result<AddressBook, StoreError> {
        if !self.path.exists() {
            return Ok(AddressBook::new());
        }

        let file = File::open(&self.path).map_err(StoreError::io("open", &self.path))?;

        // Shared lock for reading, released when `file` is dropped
        file.lock_shared()
            .map_err(StoreError::io("lock", &self.path))?;

        let mut content = Vec::new();
        BufReader::new(&file)
            .read_to_end(&mut content)
            .map_err(StoreError::io("read", &self.path))?;

        if content.iter().all(u8::is_ascii_whitespace) {
            return Err(StoreError::Corrupted {
                path: self.path.clone(),
                reason: "file is empty".to_string(),
            });
        }

        let snapshot: Snapshot =
            serde_json::from_slice(&content).map_err(|e| StoreError::Corrupted {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        Ok(snapshot.contacts.into_iter().collect())
    }

    /// Writes the whole address book (full rewrite)
    pub fn save(&self, book: &AddressBook) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(StoreError::io("create directory", parent))?;
        }

        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION,
            contacts: book.iter().collect(),
        };

        let temp_path = self.temp_path();

        let result = Self::write_snapshot(&temp_path, &snapshot).and_then(|()| {
            // Atomic rename
            fs::rename(&temp_path, &self.path).map_err(StoreError::io("replace", &self.path))
        });

        if result.is_err() {
            // Best effort; the temp file may never have been created
            let _ = fs::remove_file(&temp_path);
        }

        result
    }

    fn write_snapshot(temp_path: &Path, snapshot: &SnapshotRef<'_>) -> Result<(), StoreError> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)
            .map_err(StoreError::io("create", temp_path))?;

        file.lock_exclusive()
            .map_err(StoreError::io("lock", temp_path))?;

        let mut writer = BufWriter::new(&file);
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        writeln!(writer).map_err(StoreError::io("write", temp_path))?;
        writer
            .flush()
            .map_err(StoreError::io("flush", temp_path))?;

        Ok(())
    }
}
