//! # Storage Layer
//!
//! Persistence and configuration for the contact book.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Address book | Pretty JSON snapshot | `addressbook.json` (configurable) |
//! | Config | TOML | `--config` path or `<config dir>/contact-book/config.toml` |
//!
//! ## Write Safety
//!
//! - [`BookStore`] takes a shared lock for reads and an exclusive lock for writes (`fs2`)
//! - Saves are atomic (temp file + rename)
//!
//! ## Snapshot Layout
//!
//! ```text
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "John", "phones": ["1234567890"], "birthday": "05.06.1990" }
//!   ]
//! }
//! ```

mod snapshot;
mod config;

pub use snapshot::{BookStore, StoreError};
pub use config::{BirthdayConfig, Config, ConfigError, StorageConfig};
