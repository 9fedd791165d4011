use std::fmt;
use std::sync::mpsc::Sender;

use crate::error::RecognitionError;

/// Identifier of one recognition session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "voice#{}", self.0)
    }
}

/// Event emitted by a recognition session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// Final transcript
    Result(String),
    /// Platform error code (`no-speech`, `audio-capture`, `not-allowed`, ...)
    Error(String),
    /// Session finished, whatever the reason
    End,
}

/// A speech event tagged with the session that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEvent {
    pub session: SessionId,
    pub event: SpeechEvent,
}

/// Platform speech-to-text capability
///
/// `start` begins a session that reports through `events`; every session
/// ends with a `SpeechEvent::End`. `stop` ends the running session early.
pub trait SpeechCapability {
    fn is_available(&self) -> bool;

    fn start(
        &mut self,
        session: SessionId,
        events: Sender<SessionEvent>,
    ) -> Result<(), RecognitionError>;

    fn stop(&mut self);
}

/// Capability for platforms without speech recognition
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSpeech;

impl SpeechCapability for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn start(
        &mut self,
        _session: SessionId,
        _events: Sender<SessionEvent>,
    ) -> Result<(), RecognitionError> {
        Err(RecognitionError::Unsupported)
    }

    fn stop(&mut self) {}
}
