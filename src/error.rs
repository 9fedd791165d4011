use thiserror::Error;

/// Failures on the search path
///
/// None of these reach the render layer: the query controller absorbs them
/// into its state and surfaces the message as a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Transport-level failure (connection refused, timeout, DNS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success HTTP status
    #[error("Search failed with HTTP status {status}")]
    BadResponse { status: u16 },

    /// Endpoint answered but the body was not a result list
    #[error("Invalid search response: {0}")]
    Decode(String),

    /// The background worker is gone; requests can no longer be issued
    #[error("Search worker unavailable")]
    WorkerUnavailable,
}

/// Speech recognition failures, one per mapped platform error code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    #[error("no-speech")]
    NoSpeech,

    #[error("audio-capture")]
    AudioCapture,

    #[error("not-allowed")]
    NotAllowed,

    /// The platform has no speech capability at all
    #[error("Voice search is not supported")]
    Unsupported,

    /// Any other platform code
    #[error("{0}")]
    Other(String),
}

impl RecognitionError {
    /// Map a platform error code onto a recognition error
    pub fn from_code(code: &str) -> Self {
        match code {
            "no-speech" => RecognitionError::NoSpeech,
            "audio-capture" => RecognitionError::AudioCapture,
            "not-allowed" => RecognitionError::NotAllowed,
            other => RecognitionError::Other(other.to_string()),
        }
    }

    /// User-facing advisory shown when a voice session fails
    pub fn advisory(&self) -> &'static str {
        match self {
            RecognitionError::NoSpeech => "No speech detected",
            RecognitionError::AudioCapture => "No microphone found",
            RecognitionError::NotAllowed => "Microphone access denied",
            RecognitionError::Unsupported => "Voice search is not supported on this system",
            RecognitionError::Other(_) => "Please try again",
        }
    }
}

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {message}")]
    Parse { path: String, message: String },
}

/// Top-level error type for tripsearch
#[derive(Debug, Error)]
pub enum TripsearchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid search endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
