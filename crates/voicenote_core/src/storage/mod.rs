//! Key-value persistence boundary.
//!
//! # Responsibility
//! - Define the string-blob get/set contract the note store persists through.
//! - Provide in-memory and file-backed implementations.
//!
//! # Invariants
//! - `set` is fallible; callers must never assume persistence succeeded.
//! - Implementations store values verbatim (no transformation of blobs).

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport error for key-value persistence operations.
#[derive(Debug)]
pub enum StorageError {
    /// Key is empty or contains characters the backend cannot map.
    InvalidKey(String),
    /// Underlying I/O failure (quota, permissions, disk).
    Io(std::io::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid storage key: `{key}`"),
            Self::Io(err) => write!(f, "storage i/o failure: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidKey(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// String-blob persistence contract.
///
/// Mirrors the environment capability the note store relies on: `get`
/// returns `None` for an absent key (a normal empty state, not an error),
/// and `set` replaces the whole value for a key synchronously.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
