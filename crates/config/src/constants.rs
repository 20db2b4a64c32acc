//! Centralized constants for the projdash workspace.
//!
//! Default values shared by the config, client and CLI crates.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (10 minutes).
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Default backend base URL used for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Paths
// =============================================================================

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "projdash";

/// File name of the JSON config file.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// File name of the persisted session (token + cached user).
pub const SESSION_FILE_NAME: &str = "session.json";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_BASE_URL: &str = "PROJDASH_BASE_URL";
pub const ENV_TIMEOUT: &str = "PROJDASH_TIMEOUT";
pub const ENV_SESSION_FILE: &str = "PROJDASH_SESSION_FILE";
pub const ENV_CONFIG_PATH: &str = "PROJDASH_CONFIG_PATH";

// =============================================================================
// CLI Defaults
// =============================================================================

/// Default page size for list commands.
pub const DEFAULT_LIST_PAGE_SIZE: usize = 50;
