//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` plus `env_lock()` to prevent environment variable pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod dotenv_tests;
pub mod file_tests;

/// Every variable the loader reads, so tests can clear them all at once.
pub const ALL_VARS: [&str; 4] = [
    "PROJDASH_BASE_URL",
    "PROJDASH_TIMEOUT",
    "PROJDASH_SESSION_FILE",
    "PROJDASH_CONFIG_PATH",
];

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Unset every loader variable, then apply `overrides`.
pub fn with_clean_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
    let mut vars: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|k| (*k, None)).collect();
    for (key, value) in overrides {
        vars.retain(|(k, _)| k != key);
        vars.push((key, Some(value)));
    }
    temp_env::with_vars(vars, f);
}
