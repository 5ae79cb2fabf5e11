//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared by store, search and composer.
//! - Own the persisted wire shape (`{id, content, date}`).
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `date` and `content` are immutable once the note enters the store.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// A single saved note.
///
/// Serialized as one element of the persisted blob: a JSON array of
/// `{id, content, date}` objects, newest-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used as the removal key.
    pub id: NoteId,
    /// Free-form plain text body.
    pub content: String,
    /// Creation time in Unix epoch milliseconds.
    pub date: i64,
}

impl Note {
    /// Creates a note with a generated stable ID and the current timestamp.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), content, now_epoch_ms())
    }

    /// Creates a note with caller-provided identity and timestamp.
    ///
    /// Used by deserialization and tests where identity already exists.
    pub fn with_id(id: NoteId, content: impl Into<String>, date: i64) -> Self {
        Self {
            id,
            content: content.into(),
            date,
        }
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
