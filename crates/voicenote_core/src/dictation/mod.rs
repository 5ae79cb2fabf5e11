//! Dictation capture over an environment speech-to-text capability.
//!
//! # Responsibility
//! - Define the recognizer capability seam (probe/start/stop + events).
//! - Drive the Idle/Recording session state machine feeding the draft.
//!
//! # Invariants
//! - At most one recognition session is active per capture instance.
//! - Every result event replaces the whole draft buffer with the cumulative
//!   transcript, never appends the newest fragment.

mod capture;
mod recognizer;

pub use capture::{CaptureState, DictationCapture, DictationError, MAX_CONSECUTIVE_ERRORS};
pub use recognizer::{
    RecognitionConfig, RecognitionEvent, RecognizerError, SpeechRecognizer, SpeechSupport,
    TranscriptSegment, TranscriptUpdate,
};
