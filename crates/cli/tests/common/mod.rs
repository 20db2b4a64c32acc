//! Shared test utilities for projdash integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Give every test its own config dir and session file.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - No `PROJDASH_*` variable from the host reaches the binary.

#![allow(dead_code)]

use assert_cmd::Command;
use projdash_client::Role;
use projdash_client::testing::sample_user;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a hermetic `projdash` command for integration testing.
pub fn projdash_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("projdash");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("PROJDASH_BASE_URL")
        .env_remove("PROJDASH_TIMEOUT")
        .env_remove("PROJDASH_SESSION_FILE")
        .env_remove("PROJDASH_CONFIG_PATH")
        .env_remove("PROJDASH_EMAIL")
        .env_remove("PROJDASH_PASSWORD")
        .env_remove("RUST_LOG");

    cmd
}

/// A scratch home directory with its own session file.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir.path().join("session.json")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `projdash` pointed at `base_url`, with config and session kept in the scratch dir.
    pub fn cmd(&self, base_url: &str) -> Command {
        let mut cmd = projdash_cmd();
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("PROJDASH_BASE_URL", base_url)
            .env("PROJDASH_SESSION_FILE", self.session_path())
            .arg("--quiet");
        cmd
    }

    /// Write a session file as if `projdash login` had succeeded.
    pub fn log_in_as(&self, role: Role, token: &str) {
        let stored = serde_json::json!({
            "token": token,
            "user": sample_user(role),
        });
        std::fs::write(self.session_path(), stored.to_string()).unwrap();
    }

    pub fn session(&self) -> Option<serde_json::Value> {
        let content = std::fs::read_to_string(self.session_path()).ok()?;
        serde_json::from_str(&content).ok()
    }
}
