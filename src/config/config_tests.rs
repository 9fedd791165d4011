//! Tests for config loading

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let config = load_config_from_path(&path).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_loads_file_contents() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[search]\nendpoint = \"http://search.local\"").unwrap();

    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(config.search.endpoint, "http://search.local");
    assert_eq!(config.search.debounce_ms, 300);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[search\nendpoint = ").unwrap();

    let err = load_config_from_path(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn test_wrong_field_type_is_an_error() {
    let result = parse_config_toml("[search]\ndebounce_ms = \"fast\"\n");
    assert!(result.is_err());
}

#[test]
fn test_config_path_ends_with_tripsearch_file() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".config/tripsearch/config.toml"));
    }
}
