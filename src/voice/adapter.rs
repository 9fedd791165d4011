//! Voice input adapter
//!
//! Wraps a speech capability as an exclusive session with toggle semantics:
//! starting while idle begins listening, starting while listening stops the
//! running session instead of opening a second one.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::capability::{SessionEvent, SessionId, SpeechCapability, SpeechEvent};
use crate::error::RecognitionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Idle,
    Listening,
}

/// Result of pressing the voice control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceToggle {
    /// No speech capability on this platform; nothing happened
    Unsupported,
    Started(SessionId),
    /// A session was running and has been stopped
    Stopped(SessionId),
    /// The capability refused to start a session
    Failed(RecognitionError),
}

/// What a session event means for the search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceOutcome {
    /// Recognized text to use as the new query
    Transcript(String),
    /// Recognition failed; the adapter is idle again
    Failed(RecognitionError),
    /// Session over without anything to report
    Ended,
}

pub struct VoiceInput {
    capability: Box<dyn SpeechCapability>,
    state: VoiceState,
    last_session: u64,
    active: Option<SessionId>,
    event_tx: Sender<SessionEvent>,
    event_rx: Receiver<SessionEvent>,
}

impl VoiceInput {
    pub fn new(capability: Box<dyn SpeechCapability>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            capability,
            state: VoiceState::Idle,
            last_session: 0,
            active: None,
            event_tx,
            event_rx,
        }
    }

    /// Whether voice controls should be offered at all
    pub fn is_supported(&self) -> bool {
        self.capability.is_available()
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == VoiceState::Listening
    }

    /// Start listening, or stop the running session
    pub fn toggle(&mut self) -> VoiceToggle {
        if !self.is_supported() {
            log::debug!("Voice toggle ignored: no speech capability");
            return VoiceToggle::Unsupported;
        }

        if let Some(session) = self.active.take() {
            self.capability.stop();
            self.state = VoiceState::Idle;
            log::debug!("Stopped {}", session);
            return VoiceToggle::Stopped(session);
        }

        self.last_session = self.last_session.wrapping_add(1);
        let session = SessionId(self.last_session);
        match self.capability.start(session, self.event_tx.clone()) {
            Ok(()) => {
                self.active = Some(session);
                self.state = VoiceState::Listening;
                log::debug!("Started {}", session);
                VoiceToggle::Started(session)
            }
            Err(error) => {
                log::warn!("Failed to start {}: {}", session, error);
                self.state = VoiceState::Idle;
                VoiceToggle::Failed(error)
            }
        }
    }

    /// Stop any running session (teardown)
    pub fn stop(&mut self) {
        if let Some(session) = self.active.take() {
            self.capability.stop();
            log::debug!("Stopped {} on teardown", session);
        }
        self.state = VoiceState::Idle;
    }

    /// Apply a session event
    ///
    /// Events from sessions other than the running one are ignored.
    pub fn handle_event(&mut self, event: SessionEvent) -> Option<VoiceOutcome> {
        if self.active != Some(event.session) {
            log::debug!("Ignoring {:?} from inactive {}", event.event, event.session);
            return None;
        }

        match event.event {
            SpeechEvent::Result(transcript) => {
                let transcript = transcript.trim();
                if transcript.is_empty() {
                    return None;
                }
                Some(VoiceOutcome::Transcript(transcript.to_string()))
            }
            SpeechEvent::Error(code) => {
                let error = RecognitionError::from_code(&code);
                log::debug!("{} failed: {}", event.session, code);
                self.active = None;
                self.state = VoiceState::Idle;
                Some(VoiceOutcome::Failed(error))
            }
            SpeechEvent::End => {
                self.active = None;
                self.state = VoiceState::Idle;
                Some(VoiceOutcome::Ended)
            }
        }
    }

    /// Drain pending session events
    pub fn poll(&mut self) -> Vec<VoiceOutcome> {
        let mut events = Vec::new();
        loop {
            match self.event_rx.try_recv() {
                Ok(event) => events.push(event),
                // The adapter keeps a sender, so the channel never disconnects
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        events
            .into_iter()
            .filter_map(|e| self.handle_event(e))
            .collect()
    }
}

impl Drop for VoiceInput {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod adapter_tests;
