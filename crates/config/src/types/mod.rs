//! Configuration types for projdash.

mod connection;
mod file;

pub use connection::{Config, ConnectionConfig, SessionConfig};
pub use file::ConfigFile;
