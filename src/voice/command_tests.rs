//! Tests for the external speech command capability

use std::sync::mpsc;
use std::time::Duration;

use super::*;

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn collect(rx: &mpsc::Receiver<SessionEvent>) -> Vec<SpeechEvent> {
    let mut events = Vec::new();
    while let Ok(e) = rx.recv_timeout(Duration::from_secs(5)) {
        let done = e.event == SpeechEvent::End;
        events.push(e.event);
        if done {
            break;
        }
    }
    events
}

#[test]
fn test_empty_command_is_unavailable() {
    let speech = CommandSpeech::new(&[]);
    assert!(!speech.is_available());
}

#[test]
fn test_missing_program_is_unavailable() {
    let speech = CommandSpeech::new(&argv(&["definitely-not-a-speech-tool-xyz"]));
    assert!(!speech.is_available());
}

#[test]
fn test_start_without_program_is_unsupported() {
    let mut speech = CommandSpeech::new(&[]);
    let (tx, _rx) = mpsc::channel();
    assert_eq!(
        speech.start(SessionId(1), tx),
        Err(RecognitionError::Unsupported)
    );
}

#[cfg(unix)]
#[test]
fn test_transcript_from_stdout() {
    let mut speech = CommandSpeech::new(&argv(&["sh", "-c", "echo 'Chitwan National Park'"]));
    assert!(speech.is_available());
    let (tx, rx) = mpsc::channel();

    speech.start(SessionId(4), tx).unwrap();

    assert_eq!(
        collect(&rx),
        vec![
            SpeechEvent::Result("Chitwan National Park".to_string()),
            SpeechEvent::End
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_silent_success_is_no_speech() {
    let mut speech = CommandSpeech::new(&argv(&["sh", "-c", "true"]));
    let (tx, rx) = mpsc::channel();

    speech.start(SessionId(1), tx).unwrap();

    assert_eq!(
        collect(&rx),
        vec![SpeechEvent::Error("no-speech".to_string()), SpeechEvent::End]
    );
}

#[cfg(unix)]
#[test]
fn test_failed_command_reports_error_then_end() {
    let mut speech = CommandSpeech::new(&argv(&["sh", "-c", "echo partial; exit 3"]));
    let (tx, rx) = mpsc::channel();

    speech.start(SessionId(1), tx).unwrap();

    let events = collect(&rx);
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], SpeechEvent::Error(_)));
    assert_eq!(events[1], SpeechEvent::End);
}

#[cfg(unix)]
#[test]
fn test_stop_kills_running_command() {
    let mut speech = CommandSpeech::new(&argv(&["sh", "-c", "exec sleep 30"]));
    let (tx, rx) = mpsc::channel();

    speech.start(SessionId(9), tx).unwrap();
    speech.stop();

    let events = collect(&rx);
    assert_eq!(events.last(), Some(&SpeechEvent::End));
}
