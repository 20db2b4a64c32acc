//! Path helpers for config and session file locations.
//!
//! Responsibilities:
//! - Determine platform-appropriate default paths via the `directories` crate.
//!
//! Does NOT handle:
//! - File I/O (see `ConfigFile::read` and the client crate's `FileSessionStore`).

mod path;

pub use path::{default_config_path, default_session_path};
