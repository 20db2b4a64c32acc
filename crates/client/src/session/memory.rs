//! In-process session store.

use secrecy::SecretString;
use std::sync::RwLock;

use super::{Session, SessionStore, SessionStoreError};
use crate::models::User;

/// Session store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a session.
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: RwLock::new(Some(session)),
        }
    }

    fn read(&self) -> Option<Session> {
        // A poisoned lock still holds a consistent Option
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn write(&self, value: Option<Session>) {
        match self.inner.write() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<SecretString> {
        self.read().map(|s| s.token)
    }

    fn user(&self) -> Option<User> {
        self.read().map(|s| s.user)
    }

    fn set(&self, session: Session) -> Result<(), SessionStoreError> {
        self.write(Some(session));
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        self.write(None);
        Ok(())
    }
}
