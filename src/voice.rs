//! Voice input
//!
//! Speech-to-text is an optional platform capability. The adapter checks for
//! it before offering voice controls, keeps at most one recognition session
//! alive and turns session events into query updates or advisories.

mod adapter;
mod capability;
mod command;

pub use adapter::{VoiceInput, VoiceOutcome, VoiceState, VoiceToggle};
pub use capability::{NoSpeech, SessionEvent, SessionId, SpeechCapability, SpeechEvent};
pub use command::CommandSpeech;
