//! Error types for configuration loading.
//!
//! Invariants:
//! - Every variant names the bad input (variable, path or position).
//! - `.env` and config file errors never echo file contents; a config file
//!   may hold a session file path the user considers private.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("No backend URL configured. Set PROJDASH_BASE_URL, pass --base-url or add base_url to the config file.")]
    MissingBaseUrl,

    #[error("No home directory found for the projdash config: {0}")]
    NoConfigDir(String),

    #[error("Cannot read config file {path}: {kind}")]
    FileRead { path: PathBuf, kind: ErrorKind },

    #[error("Config file {path} is not valid JSON (line {line}, column {column})")]
    FileParse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("Request timeout {seconds}s is out of range (1..={max})")]
    TimeoutOutOfRange { seconds: u64, max: u64 },

    #[error(".env file has a syntax error at byte {error_index} (set DOTENV_DISABLED=1 to skip it)")]
    DotenvParse { error_index: usize },

    #[error("Cannot read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error(".env file could not be loaded (set DOTENV_DISABLED=1 to skip it)")]
    DotenvUnknown,
}
