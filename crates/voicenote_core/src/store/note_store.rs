//! Persisted note list state.
//!
//! # Responsibility
//! - Own the in-memory newest-first note list.
//! - Mirror every mutation synchronously into the key-value blob.
//!
//! # Invariants
//! - After `add`/`remove` return `Ok`, memory and persisted blob are equal.
//! - A failed persist leaves the in-memory list untouched and surfaces the
//!   error to the caller; the two representations never silently diverge.
//! - An absent or unparseable blob loads as an empty list, not an error.

use crate::model::note::{Note, NoteId};
use crate::storage::{KeyValueStore, StorageError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key under which the whole note list blob is persisted.
pub const NOTES_KEY: &str = "notes";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error surfaced by note store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Key-value backend refused the read or write.
    Storage(StorageError),
    /// The current list could not be encoded for persistence.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to encode note list: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Encodes a note list into the persisted JSON blob.
pub fn serialize_notes(notes: &[Note]) -> Result<String, serde_json::Error> {
    serde_json::to_string(notes)
}

/// Decodes the persisted JSON blob back into a note list.
pub fn deserialize_notes(blob: &str) -> Result<Vec<Note>, serde_json::Error> {
    serde_json::from_str(blob)
}

/// Note list owner and sole writer of the persisted blob.
pub struct NoteStore<S: KeyValueStore> {
    storage: S,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Loads the persisted list, treating absence and corruption as empty.
    ///
    /// Storage transport failure on read is still surfaced: an unreachable
    /// backend is a failure, an empty backend is a normal state.
    pub fn load(storage: S) -> StoreResult<Self> {
        let notes = match storage.get(NOTES_KEY)? {
            Some(blob) => match deserialize_notes(&blob) {
                Ok(notes) => notes,
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=recovered reason=unparseable_blob error={err}"
                    );
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        info!(
            "event=store_load module=store status=ok count={}",
            notes.len()
        );
        Ok(Self { storage, notes })
    }

    /// Current newest-first list.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Prepends a new note and persists the full list synchronously.
    ///
    /// Emptiness is not validated here; the composer gatekeeps submission.
    pub fn add(&mut self, content: impl Into<String>) -> StoreResult<&[Note]> {
        let note = Note::new(content);
        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(note);
        next.extend(self.notes.iter().cloned());

        self.persist(&next)?;
        self.notes = next;
        info!(
            "event=note_add module=store status=ok id={} count={}",
            self.notes[0].id,
            self.notes.len()
        );
        Ok(&self.notes)
    }

    /// Removes the note with the given id, if present, and persists.
    ///
    /// Removing an absent id leaves the list unchanged but still writes the
    /// blob (idempotent no-op write).
    pub fn remove(&mut self, id: NoteId) -> StoreResult<&[Note]> {
        let next: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| note.id != id)
            .cloned()
            .collect();
        let matched = next.len() < self.notes.len();

        self.persist(&next)?;
        self.notes = next;
        info!(
            "event=note_remove module=store status=ok id={id} matched={matched} count={}",
            self.notes.len()
        );
        Ok(&self.notes)
    }

    fn persist(&mut self, notes: &[Note]) -> StoreResult<()> {
        let blob = serialize_notes(notes)?;
        if let Err(err) = self.storage.set(NOTES_KEY, &blob) {
            error!(
                "event=store_persist module=store status=error count={} error={err}",
                notes.len()
            );
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{deserialize_notes, serialize_notes};
    use crate::model::note::Note;
    use uuid::Uuid;

    #[test]
    fn serialize_empty_list_is_empty_array() {
        assert_eq!(serialize_notes(&[]).unwrap(), "[]");
    }

    #[test]
    fn round_trip_preserves_ids_content_and_dates() {
        let list = vec![
            Note::with_id(Uuid::new_v4(), "newest", 2_000),
            Note::with_id(Uuid::new_v4(), "oldest", 1_000),
        ];
        let blob = serialize_notes(&list).unwrap();
        assert_eq!(deserialize_notes(&blob).unwrap(), list);
    }

    #[test]
    fn garbage_blob_fails_to_decode() {
        assert!(deserialize_notes("not json at all").is_err());
        assert!(deserialize_notes("{\"id\":1}").is_err());
    }
}
