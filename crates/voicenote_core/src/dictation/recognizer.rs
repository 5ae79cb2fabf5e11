//! Speech recognizer capability contract.
//!
//! # Responsibility
//! - Model the environment-provided streaming speech-to-text capability.
//! - Shape the event stream a session delivers back to the capture.
//!
//! # Invariants
//! - `probe` is answerable before any session exists.
//! - A result event always carries every segment recognized so far in the
//!   current session, finalized and interim alike.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Typed capability-check answer, consumed by the Idle→Recording guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechSupport {
    Supported,
    Unsupported,
}

/// Session configuration flags.
///
/// Defaults match the dictation use case: a continuous stream that does not
/// stop at the first pause, interim transcripts delivered before
/// finalization, and a single alternative per segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    pub continuous: bool,
    pub interim_results: bool,
    pub max_alternatives: u8,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            continuous: true,
            interim_results: true,
            max_alternatives: 1,
        }
    }
}

/// One recognized stretch of speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    /// Best-alternative transcript text for this segment.
    pub transcript: String,
    /// Whether recognition of this segment is finalized.
    pub is_final: bool,
}

impl TranscriptSegment {
    pub fn interim(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: false,
        }
    }

    pub fn finalized(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: true,
        }
    }
}

/// Cumulative transcript state delivered by one result event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranscriptUpdate {
    /// All segments recognized so far in this session, in recognition order.
    pub segments: Vec<TranscriptSegment>,
}

impl TranscriptUpdate {
    pub fn new(segments: Vec<TranscriptSegment>) -> Self {
        Self { segments }
    }

    /// Concatenation of every segment's transcript, the full
    /// transcript-to-date the draft buffer is replaced with.
    pub fn full_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.transcript.as_str())
            .collect()
    }
}

/// Runtime error reported by an active recognition stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerError {
    /// No usable audio input (device missing or muted).
    AudioCapture,
    /// The environment denied microphone access.
    NotAllowed,
    /// Recognition backend was unreachable.
    Network,
    /// Any other backend-reported condition, kept verbatim.
    Backend(String),
}

impl Display for RecognizerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AudioCapture => write!(f, "audio capture failed"),
            Self::NotAllowed => write!(f, "microphone access not allowed"),
            Self::Network => write!(f, "recognition backend unreachable"),
            Self::Backend(message) => write!(f, "recognition error: {message}"),
        }
    }
}

impl Error for RecognizerError {}

/// Events a session delivers to the capture, serialized on one event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// A new cumulative transcript snapshot.
    Result(TranscriptUpdate),
    /// A runtime error; the stream may or may not keep going.
    Error(RecognizerError),
}

/// Environment capability seam for streaming speech-to-text.
pub trait SpeechRecognizer {
    /// Capability check; answered without starting anything.
    fn probe(&self) -> SpeechSupport;

    /// Begins a streaming session with the given flags.
    fn start(&mut self, config: &RecognitionConfig) -> Result<(), RecognizerError>;

    /// Terminates the active session, if any.
    fn stop(&mut self);
}

#[cfg(test)]
mod tests {
    use super::{RecognitionConfig, TranscriptSegment, TranscriptUpdate};

    #[test]
    fn default_config_matches_dictation_flags() {
        let config = RecognitionConfig::default();
        assert!(config.continuous);
        assert!(config.interim_results);
        assert_eq!(config.max_alternatives, 1);
    }

    #[test]
    fn full_text_concatenates_in_recognition_order() {
        let update = TranscriptUpdate::new(vec![
            TranscriptSegment::finalized("hello "),
            TranscriptSegment::interim("world"),
        ]);
        assert_eq!(update.full_text(), "hello world");
    }

    #[test]
    fn empty_update_is_empty_text() {
        assert_eq!(TranscriptUpdate::default().full_text(), "");
    }
}
