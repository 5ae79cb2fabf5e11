//! Authoring surface: pending draft lifecycle and submission gate.
//!
//! # Responsibility
//! - Own the transient draft (text buffer, recording flag, onboarding flag).
//! - Gatekeep what reaches the note store: empty drafts never get that far.
//!
//! # Invariants
//! - The draft is never persisted; cancel discards it unconditionally.
//! - Emptiness is the literal empty string. Whitespace-only content is
//!   accepted, matching the observed submission behavior.

use crate::storage::KeyValueStore;
use crate::store::note_store::{NoteStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Transient note-in-progress state. Destroyed on submit or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDraft {
    /// Current text buffer (typed or transcribed).
    pub content: String,
    /// Whether a dictation session currently feeds this draft.
    pub recording: bool,
    /// Whether the surface shows placeholder guidance instead of the editor.
    pub show_onboarding: bool,
}

impl PendingDraft {
    /// Fresh draft as created when the authoring surface opens.
    pub fn empty() -> Self {
        Self {
            content: String::new(),
            recording: false,
            show_onboarding: true,
        }
    }
}

impl Default for PendingDraft {
    fn default() -> Self {
        Self::empty()
    }
}

/// Error surfaced by draft submission.
#[derive(Debug)]
pub enum ComposerError {
    /// Draft content is the empty string; nothing reached the store.
    EmptyDraft,
    /// The store accepted the submission but failed to complete it.
    Store(StoreError),
}

impl Display for ComposerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDraft => write!(f, "draft content is empty"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ComposerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyDraft => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ComposerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Authoring surface state machine around one pending draft.
#[derive(Debug, Default)]
pub struct Composer {
    draft: PendingDraft,
}

impl Composer {
    /// Opens the surface with an empty draft and onboarding visible.
    pub fn open() -> Self {
        Self {
            draft: PendingDraft::empty(),
        }
    }

    pub fn draft(&self) -> &PendingDraft {
        &self.draft
    }

    /// Mutable access for the dictation capture while recording is active.
    pub fn draft_mut(&mut self) -> &mut PendingDraft {
        &mut self.draft
    }

    /// Switches from placeholder guidance to the text editor.
    pub fn begin_typing(&mut self) {
        self.draft.show_onboarding = false;
    }

    /// Replaces the buffer with typed input.
    ///
    /// Clearing the buffer back to empty re-shows the onboarding guidance.
    pub fn set_content(&mut self, text: impl Into<String>) {
        self.draft.content = text.into();
        if self.draft.content.is_empty() {
            self.draft.show_onboarding = true;
        }
    }

    /// Submits the draft into the store.
    ///
    /// On success the draft is cleared, onboarding is restored, and the
    /// updated newest-first list is returned. On failure the draft is kept
    /// so the user can retry.
    pub fn submit<'s, S: KeyValueStore>(
        &mut self,
        store: &'s mut NoteStore<S>,
    ) -> Result<&'s [crate::model::note::Note], ComposerError> {
        if self.draft.content.is_empty() {
            warn!("event=draft_submit module=composer status=rejected reason=empty_draft");
            return Err(ComposerError::EmptyDraft);
        }

        let notes = store.add(self.draft.content.clone())?;
        self.draft = PendingDraft::empty();
        info!(
            "event=draft_submit module=composer status=ok count={}",
            notes.len()
        );
        Ok(notes)
    }

    /// Closes the surface without submitting; the draft is discarded.
    pub fn cancel(&mut self) {
        self.draft = PendingDraft::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::{Composer, PendingDraft};

    #[test]
    fn open_starts_with_onboarding_and_empty_buffer() {
        let composer = Composer::open();
        assert_eq!(composer.draft(), &PendingDraft::empty());
        assert!(composer.draft().show_onboarding);
    }

    #[test]
    fn clearing_content_restores_onboarding() {
        let mut composer = Composer::open();
        composer.begin_typing();
        composer.set_content("half a thought");
        assert!(!composer.draft().show_onboarding);
        composer.set_content("");
        assert!(composer.draft().show_onboarding);
    }

    #[test]
    fn cancel_discards_everything() {
        let mut composer = Composer::open();
        composer.set_content("never saved");
        composer.cancel();
        assert_eq!(composer.draft(), &PendingDraft::empty());
    }
}
