//! Session storage: the persisted bearer token plus the cached user profile.
//!
//! The store is an explicit object handed to the client and the router by
//! `Arc`. There is no process-global session.
//!
//! # Invariants
//! - `token()` and `user()` are both `Some` or both `None` after any `set`/`clear`.
//! - `clear()` is idempotent.
//! - Tokens are held as [`SecretString`] and never appear in `Debug` output.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use secrecy::SecretString;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::User;

/// An authenticated session: token and the user it belongs to.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: SecretString,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: SecretString::new(token.into().into()),
            user,
        }
    }
}

/// Errors raised by session stores.
#[derive(Error, Debug)]
pub enum SessionStoreError {
    #[error("failed to write session file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove session file {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot determine default session location: {0}")]
    NoDefaultLocation(String),

    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persistence for the current session.
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    /// Current bearer token, if logged in.
    fn token(&self) -> Option<SecretString>;

    /// Cached profile of the logged-in user.
    fn user(&self) -> Option<User>;

    /// Replace the stored session.
    fn set(&self, session: Session) -> Result<(), SessionStoreError>;

    /// Remove token and user.
    fn clear(&self) -> Result<(), SessionStoreError>;

    /// Token and user together.
    fn session(&self) -> Option<Session> {
        match (self.token(), self.user()) {
            (Some(token), Some(user)) => Some(Session { token, user }),
            _ => None,
        }
    }

    /// Refresh the cached user without touching the token.
    fn update_user(&self, user: User) -> Result<(), SessionStoreError> {
        match self.token() {
            Some(token) => self.set(Session { token, user }),
            None => Ok(()),
        }
    }
}
