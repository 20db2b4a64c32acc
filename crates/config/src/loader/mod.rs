//! Configuration loader for `.env` files, environment variables and the JSON config file.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Invariants / Assumptions:
//! - Builder overrides > environment variables > config file > defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, validate_and_normalize_base_url};
pub use env::env_var_or_none;
pub use error::ConfigError;
