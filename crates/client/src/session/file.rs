//! Session store backed by a JSON file.
//!
//! The file holds `{"token": "...", "user": {...}}`. A missing, unreadable or
//! malformed file reads as "logged out"; it never fails a request.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{Session, SessionStore, SessionStoreError};
use crate::models::User;

#[derive(Serialize, Deserialize)]
struct StoredSession {
    token: String,
    user: User,
}

/// Session store persisted at a fixed path.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    pub fn at_default_location() -> Result<Self, SessionStoreError> {
        let path = projdash_config::default_session_path()
            .map_err(|e| SessionStoreError::NoDefaultLocation(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Option<StoredSession> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read session file");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(stored) => Some(stored),
            Err(_) => {
                // Do not echo contents: the file holds a bearer token
                warn!(path = %self.path.display(), "Ignoring malformed session file");
                None
            }
        }
    }

    /// Write through a uniquely named temp file in the target directory,
    /// then rename it over the session file.
    fn write_file(&self, bytes: &[u8]) -> Result<(), SessionStoreError> {
        let write_err = |source| SessionStoreError::Write {
            path: self.path.clone(),
            source,
        };

        let parent_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent_dir).map_err(write_err)?;

        let mut builder = tempfile::Builder::new();
        builder.prefix(".session-").suffix(".tmp");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o600));
        }
        let mut temp_file = builder.tempfile_in(parent_dir).map_err(write_err)?;
        temp_file.write_all(bytes).map_err(write_err)?;
        temp_file.as_file().sync_all().map_err(write_err)?;

        temp_file
            .persist(&self.path)
            .map(|_| ())
            .map_err(|e| write_err(e.error))
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<SecretString> {
        self.load()
            .map(|stored| SecretString::new(stored.token.into()))
    }

    fn user(&self) -> Option<User> {
        self.load().map(|stored| stored.user)
    }

    fn session(&self) -> Option<Session> {
        // Single read so token and user come from the same file version
        self.load().map(|stored| Session::new(stored.token, stored.user))
    }

    fn set(&self, session: Session) -> Result<(), SessionStoreError> {
        let stored = StoredSession {
            token: session.token.expose_secret().to_string(),
            user: session.user,
        };
        let bytes = serde_json::to_vec_pretty(&stored)?;
        self.write_file(&bytes)?;
        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session file removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionStoreError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
