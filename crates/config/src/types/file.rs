//! On-disk JSON config file shape.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::loader::ConfigError;

/// Contents of `config.json`. Every field is optional; missing values fall
/// back to environment variables or built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
}

impl ConfigFile {
    /// Read and parse a config file.
    ///
    /// Parse errors report only the path, never file contents.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            kind: e.kind(),
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::FileParse {
            path: path.to_path_buf(),
            line: e.line(),
            column: e.column(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"base_url": "https://pm.example.edu/api"}"#).unwrap();

        let file = ConfigFile::read(&path).unwrap();
        assert_eq!(file.base_url.as_deref(), Some("https://pm.example.edu/api"));
        assert!(file.timeout_seconds.is_none());
        assert!(file.session_file.is_none());
    }

    #[test]
    fn test_read_rejects_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"base_uri": "typo"}"#).unwrap();

        let err = ConfigFile::read(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileParse { .. }));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ConfigFile::read(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
