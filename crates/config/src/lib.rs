//! Configuration management for projdash.
//!
//! This crate provides types and loaders for the dashboard client's backend
//! connection and session-file settings, read from `.env` files, environment
//! variables and an optional JSON config file.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none, validate_and_normalize_base_url};
pub use persistence::{default_config_path, default_session_path};
pub use types::{Config, ConfigFile, ConnectionConfig, SessionConfig};
