//! External speech-to-text command
//!
//! Runs a configured program that records from the microphone and prints
//! the transcript on stdout. The capability is only offered when the
//! program can be found on PATH.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use super::capability::{SessionEvent, SessionId, SpeechCapability, SpeechEvent};
use crate::error::RecognitionError;

pub struct CommandSpeech {
    program: Option<PathBuf>,
    args: Vec<String>,
    child: Option<Arc<Mutex<Child>>>,
}

impl CommandSpeech {
    /// Build from an argv; the first element is resolved on PATH
    pub fn new(command: &[String]) -> Self {
        let program = command.first().and_then(|p| match which::which(p) {
            Ok(path) => Some(path),
            Err(e) => {
                log::debug!("Speech command {:?} not found: {}", p, e);
                None
            }
        });
        let args = command.iter().skip(1).cloned().collect();

        Self {
            program,
            args,
            child: None,
        }
    }

    pub fn program(&self) -> Option<&PathBuf> {
        self.program.as_ref()
    }
}

impl SpeechCapability for CommandSpeech {
    fn is_available(&self) -> bool {
        self.program.is_some()
    }

    fn start(
        &mut self,
        session: SessionId,
        events: Sender<SessionEvent>,
    ) -> Result<(), RecognitionError> {
        let program = self.program.as_ref().ok_or(RecognitionError::Unsupported)?;

        let mut child = Command::new(program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                log::warn!("Failed to spawn speech command: {}", e);
                RecognitionError::AudioCapture
            })?;

        let stdout = child.stdout.take();
        let child = Arc::new(Mutex::new(child));
        self.child = Some(Arc::clone(&child));

        std::thread::spawn(move || {
            let mut transcript = String::new();
            if let Some(mut stdout) = stdout {
                let _ = stdout.read_to_string(&mut transcript);
            }

            // stdout is closed, so the process is exiting; wait for its status
            let success = child
                .lock()
                .ok()
                .and_then(|mut c| c.wait().ok())
                .is_some_and(|status| status.success());

            let event = match (success, transcript.trim()) {
                (true, "") => SpeechEvent::Error("no-speech".to_string()),
                (true, text) => SpeechEvent::Result(text.to_string()),
                (false, _) => SpeechEvent::Error("aborted".to_string()),
            };

            let _ = events.send(SessionEvent { session, event });
            let _ = events.send(SessionEvent {
                session,
                event: SpeechEvent::End,
            });
        });

        Ok(())
    }

    fn stop(&mut self) {
        if let Some(child) = self.child.take()
            && let Ok(mut child) = child.lock()
        {
            let _ = child.kill();
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
