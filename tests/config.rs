//! Configuration system tests
//!
//! Tests for config paths and loading/saving the toggle config.

use string_toggle::config::{ToggleConfig, DEFAULT_REFRESH_DEBOUNCE_MS};
use string_toggle::config_paths;
use tempfile::TempDir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("string-toggle"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_inside_config_dir() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
    assert!(logs.ends_with("logs"));
}

// ========================================================================
// ToggleConfig Tests
// ========================================================================

#[test]
fn test_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = ToggleConfig::load_from(&temp.path().join("config.yaml"));
    assert_eq!(config, ToggleConfig::default());
}

#[test]
fn test_invalid_yaml_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    std::fs::write(&path, "auto_collapse_on_save: [not a bool\n").unwrap();

    assert_eq!(ToggleConfig::load_from(&path), ToggleConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    std::fs::write(&path, "auto_collapse_on_save: false\n").unwrap();

    let config = ToggleConfig::load_from(&path);
    assert!(!config.auto_collapse_on_save);
    assert_eq!(config.refresh_debounce_ms, DEFAULT_REFRESH_DEBOUNCE_MS);
}

#[test]
fn test_save_creates_parent_dir_and_loads_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.yaml");
    let config = ToggleConfig {
        auto_collapse_on_save: false,
        refresh_debounce_ms: 75,
    };

    config.save_to(&path).unwrap();
    assert!(path.exists());
    assert_eq!(ToggleConfig::load_from(&path), config);
}
