//! Core domain logic for Voicenote.
//! This crate is the single source of truth for note list and dictation
//! behavior; surfaces on top of it are presentation glue.

pub mod composer;
pub mod dictation;
pub mod logging;
pub mod model;
pub mod search;
pub mod storage;
pub mod store;

pub use composer::{Composer, ComposerError, PendingDraft};
pub use dictation::{
    CaptureState, DictationCapture, DictationError, RecognitionConfig, RecognitionEvent,
    RecognizerError, SpeechRecognizer, SpeechSupport, TranscriptSegment, TranscriptUpdate,
    MAX_CONSECUTIVE_ERRORS,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use search::substring::filter_notes;
pub use storage::{
    FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError, StorageResult,
};
pub use store::note_store::{
    deserialize_notes, serialize_notes, NoteStore, StoreError, StoreResult, NOTES_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
