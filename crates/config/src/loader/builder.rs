//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Merge configuration from the config file, environment variables and builder overrides.
//! - Validate and normalize the result into a `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Reading session state (see the client crate).
//!
//! Invariants / Assumptions:
//! - `from_file()` only fills values that are still unset, so environment
//!   variables win over the file regardless of call order.
//! - `with_*` overrides replace whatever was loaded before them.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::persistence::default_config_path;
use crate::types::{Config, ConfigFile, ConnectionConfig, SessionConfig};

/// Configuration loader that builds config from the environment and a config file.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    timeout: Option<Duration>,
    session_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Skipped entirely when `DOTENV_DISABLED` is `true` or `1`. A missing
    /// `.env` file is not an error.
    ///
    /// SAFETY: Error messages never include raw .env line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                Ok(self)
            }
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Read configuration from the JSON config file.
    ///
    /// An explicitly configured path must exist. The default path is optional
    /// and silently skipped when absent.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let (path, explicit) = match self.config_path.clone() {
            Some(path) => (path, true),
            None => (
                default_config_path()
                    .map_err(|e| ConfigError::NoConfigDir(e.to_string()))?,
                false,
            ),
        };

        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "No config file found, using defaults");
            return Ok(self);
        }

        let file = ConfigFile::read(&path)?;
        self.apply_file(file);
        Ok(self)
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if self.base_url.is_none() {
            self.base_url = file.base_url;
        }
        if self.timeout.is_none() {
            self.timeout = file.timeout_seconds.map(Duration::from_secs);
        }
        if self.session_file.is_none() {
            self.session_file = file.session_file;
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the session file path.
    pub fn with_session_file(mut self, path: PathBuf) -> Self {
        self.session_file = Some(path);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        Ok(Config {
            connection: ConnectionConfig { base_url, timeout },
            session: SessionConfig {
                session_file: self.session_file,
            },
        })
    }

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_session_file(&mut self, path: Option<PathBuf>) {
        self.session_file = path;
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let seconds = timeout.as_secs();
    if (1..=MAX_TIMEOUT_SECS).contains(&seconds) {
        Ok(())
    } else {
        Err(ConfigError::TimeoutOutOfRange {
            seconds,
            max: MAX_TIMEOUT_SECS,
        })
    }
}

/// Validates and normalizes a base URL string.
///
/// - Blank input is treated as missing.
/// - Must parse as an absolute http(s) URL with a host.
/// - Trailing slashes are stripped so endpoint paths can be appended.
pub fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. http://localhost:5000/api): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. http://localhost:5000/api)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
