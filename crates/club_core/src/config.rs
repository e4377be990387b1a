//! Store configuration passed into registry initialization.
//!
//! # Invariants
//! - The store location is an explicit value, never a process global.
//! - `reset_on_open` defaults to `true`, so each session starts empty.

use crate::db::OpenMode;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default database file name, resolved against the working directory.
pub const DEFAULT_DB_FILE_NAME: &str = "club_members.db";

/// Where member records are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    /// Process-local store, discarded on close. Used by tests.
    Memory,
}

impl Display for StoreLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => f.write_str(":memory:"),
        }
    }
}

/// Settings for opening the registry store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub location: StoreLocation,
    /// Drop existing members when the store is opened.
    pub reset_on_open: bool,
}

impl StoreConfig {
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            location: StoreLocation::File(path.as_ref().to_path_buf()),
            reset_on_open: true,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            location: StoreLocation::Memory,
            reset_on_open: true,
        }
    }

    /// Keeps rows written by earlier sessions instead of wiping them.
    pub fn keep_existing(mut self) -> Self {
        self.reset_on_open = false;
        self
    }

    pub fn open_mode(&self) -> OpenMode {
        if self.reset_on_open {
            OpenMode::Reset
        } else {
            OpenMode::Keep
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::file(DEFAULT_DB_FILE_NAME)
    }
}
