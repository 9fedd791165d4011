//! Tests for error types

use super::*;

#[test]
fn test_recognition_codes_map_to_variants() {
    assert_eq!(
        RecognitionError::from_code("no-speech"),
        RecognitionError::NoSpeech
    );
    assert_eq!(
        RecognitionError::from_code("audio-capture"),
        RecognitionError::AudioCapture
    );
    assert_eq!(
        RecognitionError::from_code("not-allowed"),
        RecognitionError::NotAllowed
    );
    assert_eq!(
        RecognitionError::from_code("network"),
        RecognitionError::Other("network".to_string())
    );
}

#[test]
fn test_recognition_advisories() {
    assert_eq!(
        RecognitionError::NoSpeech.advisory(),
        "No speech detected"
    );
    assert_eq!(
        RecognitionError::AudioCapture.advisory(),
        "No microphone found"
    );
    assert_eq!(
        RecognitionError::NotAllowed.advisory(),
        "Microphone access denied"
    );
    assert_eq!(
        RecognitionError::Other("aborted".to_string()).advisory(),
        "Please try again"
    );
}

#[test]
fn test_bad_response_display_includes_status() {
    let error = SearchError::BadResponse { status: 503 };
    assert!(error.to_string().contains("503"));
}

#[test]
fn test_network_error_display() {
    let error = SearchError::Network("connection refused".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Network error"));
    assert!(msg.contains("connection refused"));
}

#[test]
fn test_search_error_clone_and_equality() {
    let err1 = SearchError::Decode("expected `results`".to_string());
    let err2 = err1.clone();
    let err3 = SearchError::Decode("different".to_string());

    assert_eq!(err1, err2);
    assert_ne!(err1, err3);
}

#[test]
fn test_io_error_converts_into_crate_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = TripsearchError::from(io_err);
    assert!(matches!(err, TripsearchError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_config_error_is_transparent() {
    let err = TripsearchError::from(ConfigError::Parse {
        path: "/tmp/config.toml".to_string(),
        message: "expected `=`".to_string(),
    });
    let msg = err.to_string();
    assert!(msg.starts_with("Invalid config /tmp/config.toml"));
    assert!(msg.contains("expected `=`"));
}
