//! Configuration loading
//!
//! Reads `~/.config/tripsearch/config.toml`. A missing file yields defaults;
//! a file that exists but cannot be parsed is an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

mod types;

pub use types::{Config, RoutesConfig, SearchConfig, VoiceConfig};

const CONFIG_DIR: &str = "tripsearch";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return Ok(Config::default()),
        },
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };

    parse_config_toml(&contents).map_err(|message| ConfigError::Parse {
        path: path.display().to_string(),
        message,
    })
}

pub fn parse_config_toml(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
