//! Client builder for constructing [`ProjectClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating and normalizing the base URL
//! - Configuring the underlying HTTP client (fixed timeout, redirect limit)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`ProjectClient`] methods)
//! - Loading configuration from env or files (handled by `projdash_config::ConfigLoader`)
//!
//! # Invariants
//! - The base URL is an absolute http(s) URL without a trailing slash
//! - A client built without a session store uses an empty in-memory store
//! - A client built without a navigator ignores redirects

use std::sync::Arc;
use std::time::Duration;

use projdash_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
    validate_and_normalize_base_url,
};

use crate::client::ProjectClient;
use crate::error::{ClientError, Result};
use crate::navigation::{Navigator, NoopNavigator};
use crate::session::{MemorySessionStore, SessionStore};

/// Builder for creating a new [`ProjectClient`].
///
/// ```rust,ignore
/// let client = ProjectClient::builder()
///     .base_url("http://localhost:5000/api")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct ProjectClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    session_store: Option<Arc<dyn SessionStore>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl Default for ProjectClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_store: None,
            navigator: None,
        }
    }
}

impl ProjectClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL, e.g. `http://localhost:5000/api`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Take base URL and timeout from loaded configuration.
    pub fn from_config(self, config: &Config) -> Self {
        self.base_url(config.connection.base_url.clone())
            .timeout(config.connection.timeout)
    }

    pub fn build(self) -> Result<ProjectClient> {
        let raw = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url =
            validate_and_normalize_base_url(&raw).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        if self.timeout.is_zero() {
            return Err(ClientError::InvalidRequest(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(ProjectClient {
            http,
            base_url,
            session_store: self
                .session_store
                .unwrap_or_else(|| Arc::new(MemorySessionStore::new())),
            navigator: self.navigator.unwrap_or_else(|| Arc::new(NoopNavigator)),
        })
    }
}
