//! Dictation session state machine.
//!
//! # Responsibility
//! - Guard Idle→Recording on recognizer availability.
//! - Feed cumulative transcripts into the pending draft while recording.
//! - Stop dead streams after repeated recognition errors.
//!
//! # Invariants
//! - The session handle lives inside this instance; there is no shared
//!   module-level recognizer state.
//! - Stopping never clears the draft buffer; the last transcript survives.

use super::recognizer::{
    RecognitionConfig, RecognitionEvent, RecognizerError, SpeechRecognizer, SpeechSupport,
};
use crate::composer::PendingDraft;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Consecutive recognition errors tolerated before the session auto-stops.
pub const MAX_CONSECUTIVE_ERRORS: u8 = 3;

/// Capture lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Recording,
}

/// Error surfaced when a session cannot be started.
#[derive(Debug)]
pub enum DictationError {
    /// The environment exposes no speech-recognition capability.
    Unsupported,
    /// The recognizer refused to open a stream.
    Recognizer(RecognizerError),
}

impl Display for DictationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported => write!(f, "speech recognition is not supported here"),
            Self::Recognizer(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DictationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unsupported => None,
            Self::Recognizer(err) => Some(err),
        }
    }
}

/// Idle/Recording state machine owning one recognizer session.
pub struct DictationCapture<R: SpeechRecognizer> {
    recognizer: R,
    config: RecognitionConfig,
    state: CaptureState,
    consecutive_errors: u8,
}

impl<R: SpeechRecognizer> DictationCapture<R> {
    /// Creates an idle capture with default session flags.
    pub fn new(recognizer: R) -> Self {
        Self::with_config(recognizer, RecognitionConfig::default())
    }

    pub fn with_config(recognizer: R, config: RecognitionConfig) -> Self {
        Self {
            recognizer,
            config,
            state: CaptureState::Idle,
            consecutive_errors: 0,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == CaptureState::Recording
    }

    /// Idle→Recording transition.
    ///
    /// Refused with `Unsupported` when the capability probe fails; the state
    /// stays Idle and the draft is untouched. Starting while already
    /// recording terminates the prior session first, so at most one stream
    /// is ever live.
    pub fn start(&mut self, draft: &mut PendingDraft) -> Result<(), DictationError> {
        if self.recognizer.probe() == SpeechSupport::Unsupported {
            warn!("event=dictation_start module=dictation status=rejected reason=unsupported");
            return Err(DictationError::Unsupported);
        }

        if self.state == CaptureState::Recording {
            debug!("event=dictation_start module=dictation status=restart");
            self.recognizer.stop();
        }

        if let Err(err) = self.recognizer.start(&self.config) {
            // Why: a restart may already have stopped the prior session;
            // never report Recording against a stream that failed to open.
            self.state = CaptureState::Idle;
            draft.recording = false;
            warn!("event=dictation_start module=dictation status=error error={err}");
            return Err(DictationError::Recognizer(err));
        }

        self.state = CaptureState::Recording;
        self.consecutive_errors = 0;
        draft.recording = true;
        draft.show_onboarding = false;
        info!("event=dictation_start module=dictation status=ok");
        Ok(())
    }

    /// Applies one session event to the draft.
    ///
    /// Events arriving after the session stopped are ignored; the event loop
    /// serializes delivery, so a late event is stale by definition.
    pub fn handle_event(&mut self, draft: &mut PendingDraft, event: RecognitionEvent) {
        if self.state != CaptureState::Recording {
            debug!("event=dictation_event module=dictation status=ignored reason=idle");
            return;
        }

        match event {
            RecognitionEvent::Result(update) => {
                draft.content = update.full_text();
                self.consecutive_errors = 0;
            }
            RecognitionEvent::Error(err) => {
                self.consecutive_errors += 1;
                warn!(
                    "event=dictation_error module=dictation status=error consecutive={} error={err}",
                    self.consecutive_errors
                );
                if self.consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    info!(
                        "event=dictation_stop module=dictation status=auto reason=repeated_errors"
                    );
                    self.stop(draft);
                }
            }
        }
    }

    /// Recording→Idle transition; the buffer keeps the last transcript.
    pub fn stop(&mut self, draft: &mut PendingDraft) {
        if self.state == CaptureState::Idle {
            return;
        }
        self.recognizer.stop();
        self.state = CaptureState::Idle;
        self.consecutive_errors = 0;
        draft.recording = false;
        info!("event=dictation_stop module=dictation status=ok");
    }
}
