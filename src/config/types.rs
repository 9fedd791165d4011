// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Search endpoint and suggestion pipeline settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Quiet period after the last keystroke before a request is issued
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            endpoint: default_endpoint(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Voice input configuration section
///
/// `command` is the argv of an external speech-to-text program that prints
/// its transcript on stdout. Empty means voice input is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct VoiceConfig {
    #[serde(default)]
    pub command: Vec<String>,
}

/// Route rendering configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct RoutesConfig {
    /// Prefix prepended to route paths when printing the navigation target
    #[serde(default)]
    pub base_url: String,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
}
