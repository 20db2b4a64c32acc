//! Config file tests for the configuration loader.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serial_test::serial;
use tempfile::TempDir;

use super::{env_lock, with_clean_env};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
#[serial]
fn test_file_values_applied() {
    let _lock = env_lock().lock().unwrap();
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"{"base_url": "https://file.example.edu/api", "timeout_seconds": 12, "session_file": "/var/tmp/s.json"}"#,
    );

    with_clean_env(&[], || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_env()
            .unwrap()
            .from_file()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.connection.base_url, "https://file.example.edu/api");
        assert_eq!(config.connection.timeout, Duration::from_secs(12));
        assert_eq!(
            config.session.session_file,
            Some(PathBuf::from("/var/tmp/s.json"))
        );
    });
}

#[test]
#[serial]
fn test_env_wins_over_file() {
    let _lock = env_lock().lock().unwrap();
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"{"base_url": "https://file.example.edu", "timeout_seconds": 12}"#,
    );

    with_clean_env(&[("PROJDASH_BASE_URL", "https://env.example.edu")], || {
        // File loaded first; env applied after must still win.
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.connection.base_url, "https://env.example.edu");
        assert_eq!(config.connection.timeout, Duration::from_secs(12));
    });
}

#[test]
#[serial]
fn test_explicit_missing_file_is_error() {
    let _lock = env_lock().lock().unwrap();
    let dir = TempDir::new().unwrap();
    with_clean_env(&[], || {
        let err = ConfigLoader::new()
            .with_config_path(dir.path().join("absent.json"))
            .from_file()
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    });
}

#[test]
#[serial]
fn test_malformed_file_does_not_leak_contents() {
    let _lock = env_lock().lock().unwrap();
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), r#"{"base_url": "super-secret-value""#);
    with_clean_env(&[], || {
        let err = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileParse { .. }));
        assert!(!err.to_string().contains("super-secret-value"));
    });
}
