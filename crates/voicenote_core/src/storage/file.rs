//! File-backed key-value store.
//!
//! # Responsibility
//! - Persist string blobs as one file per key under a root directory.
//! - Keep writes crash-safe via temp-file-then-rename.
//!
//! # Invariants
//! - Keys map 1:1 to file names; only `[A-Za-z0-9._-]` keys are accepted.
//! - A missing blob file reads as `None`, never as an error.

use super::{KeyValueStore, StorageError, StorageResult};
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory-of-blobs store, the local analog of browser local storage.
#[derive(Debug)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Opens (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        if let Err(err) = fs::create_dir_all(&root) {
            error!(
                "event=storage_open module=storage status=error root={} error={}",
                root.display(),
                err
            );
            return Err(err.into());
        }
        info!(
            "event=storage_open module=storage status=ok root={}",
            root.display()
        );
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() || !key.chars().all(is_key_char) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.blob_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => {
                error!(
                    "event=storage_get module=storage status=error key={key} error={err}"
                );
                Err(err.into())
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.blob_path(key)?;
        // Why: write-then-rename keeps a crash mid-write from truncating the
        // blob, and `~` sits outside the key alphabet, so a staging file can
        // never collide with another key's blob.
        let staging = self.root.join(format!("{key}~tmp"));
        if let Err(err) = fs::write(&staging, value).and_then(|()| fs::rename(&staging, &path)) {
            error!(
                "event=storage_set module=storage status=error key={key} bytes={} error={err}",
                value.len()
            );
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FileKeyValueStore, KeyValueStore, StorageError};

    #[test]
    fn missing_blob_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();
        assert_eq!(store.get("notes").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileKeyValueStore::open(dir.path()).unwrap();
            store.set("notes", "[1,2,3]").unwrap();
        }
        let reopened = FileKeyValueStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("notes").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn writing_one_key_never_clobbers_a_dotted_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileKeyValueStore::open(dir.path()).unwrap();
        store.set("notes.tmp", "precious").unwrap();
        store.set("notes", "[]").unwrap();
        assert_eq!(store.get("notes.tmp").unwrap().as_deref(), Some("precious"));
        assert_eq!(store.get("notes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn keys_sharing_a_stem_keep_distinct_blobs() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileKeyValueStore::open(dir.path()).unwrap();
        store.set("a.b", "left").unwrap();
        store.set("a.c", "right").unwrap();
        assert_eq!(store.get("a.b").unwrap().as_deref(), Some("left"));
        assert_eq!(store.get("a.c").unwrap().as_deref(), Some("right"));
    }

    #[test]
    fn rejects_keys_that_escape_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileKeyValueStore::open(dir.path()).unwrap();
        let err = store.set("../escape", "value").unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
        let err = store.get("a/b").unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }
}
