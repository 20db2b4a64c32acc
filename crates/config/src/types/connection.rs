//! Connection and session configuration types.
//!
//! Responsibilities:
//! - Define connection settings (backend URL, request timeout).
//! - Define where the persisted session lives.
//! - Define the main `Config` structure combining both.
//!
//! Does NOT handle:
//! - Loading from files/env (see `loader` module).
//! - Reading or writing the session file itself (see the client crate's session store).
//!
//! Invariants:
//! - Durations are serialized as whole seconds.
//! - `base_url` never ends with a slash once built by `ConfigLoader`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Serialize `Duration` as integer seconds.
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the REST backend (e.g. `http://localhost:5000/api`)
    pub base_url: String,
    /// Fixed per-client request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Session persistence settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Explicit session file path. `None` means the platform default.
    pub session_file: Option<PathBuf>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub session: SessionConfig,
}

impl Config {
    /// Convenience constructor used by tests and embedders.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: base_url.into(),
                ..ConnectionConfig::default()
            },
            session: SessionConfig::default(),
        }
    }
}
