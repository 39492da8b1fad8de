//! Keyed string-blob storage seam.
//!
//! # Responsibility
//! - Define the get/set primitive the store persists snapshots through.
//! - Provide file-backed and in-memory implementations.
//!
//! # Invariants
//! - `get` reports an unreadable or missing blob as `None`; the caller
//!   treats that as "no snapshot", never as a fatal condition.
//! - `set` failures are surfaced as `StorageError` values, not panics, so
//!   the store can log and keep running on in-memory state.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::PathBuf;

pub type StorageResult = Result<(), StorageError>;

/// Write-side failure of a storage backend.
#[derive(Debug)]
pub enum StorageError {
    Io { key: String, source: io::Error },
    Unavailable { key: String },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { key, source } => write!(f, "failed to write blob `{key}`: {source}"),
            Self::Unavailable { key } => write!(f, "storage unavailable for blob `{key}`"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Unavailable { .. } => None,
        }
    }
}

/// Byte/text-level persistence primitive: one string blob per key.
pub trait Storage {
    /// Returns the blob stored under `key`, or `None` when absent or
    /// unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous blob.
    fn set(&mut self, key: &str, value: &str) -> StorageResult;
}

/// File-backed storage: each key maps to `<dir>/<key>.json`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.blob_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult {
        let map_err = |source: io::Error| StorageError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(map_err)?;
        fs::write(self.blob_path(key), value).map_err(map_err)
    }
}

/// In-memory storage for tests and ephemeral sessions.
///
/// Writes can be poisoned to exercise the quota-exceeded recovery path.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the blob under `key`, as if a previous session wrote it.
    pub fn seeded(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.blobs.insert(key.to_string(), value.to_string());
        storage
    }

    /// Makes every subsequent `set` fail.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult {
        if self.fail_writes {
            return Err(StorageError::Unavailable {
                key: key.to_string(),
            });
        }
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
