//! Case-insensitive substring filtering over the note list.
//!
//! # Responsibility
//! - Provide the display-only filter behind the search input.
//!
//! # Invariants
//! - Never mutates or reorders the input list.
//! - An empty query passes every note through.

use crate::model::note::Note;

/// Returns the notes whose content contains `query` case-insensitively.
///
/// Pure function: input order is preserved and nothing is mutated, so the
/// filter is idempotent for a fixed query.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.is_empty() {
        return notes.iter().collect();
    }
    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| note.content.to_lowercase().contains(&needle))
        .collect()
}
