//! The authenticated dashboard client.
//!
//! This module provides [`ProjectClient`], which reads the bearer token from a
//! [`SessionStore`] before every call and tears the session down when the
//! backend rejects it.
//!
//! # Submodules
//! - [`builder`]: client construction and configuration
//! - `session`: login, registration, logout
//! - `profile`, `admin`, `guide`, `student`, `minutes`: API methods per backend area
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Token persistence (delegated to the [`SessionStore`])
//! - Route decisions (delegated to the [`Navigator`], usually a [`crate::guard::Router`])
//!
//! # Invariants
//! - A request is sent with `Authorization: Bearer <token>` iff the store holds a token.
//! - A 401/403 on an authenticated call clears the store and issues exactly one
//!   redirect to [`LOGIN_PATH`] before the error reaches the caller.
//! - Other failures leave the session untouched. Nothing is retried.

pub mod builder;

mod admin;
mod guide;
mod minutes;
mod profile;
mod session;
mod student;

use std::future::Future;
use std::sync::Arc;

use tracing::{error, warn};

use crate::cancellation::CancellationToken;
use crate::error::{ClientError, Result};
use crate::models::User;
use crate::navigation::{LOGIN_PATH, Navigator};
use crate::session::SessionStore;

/// Run an endpoint call with the stored token and handle session rejection.
///
/// The placeholder `$token` is bound to an `Option<&str>` for the call.
///
/// ```ignore
/// session_call!(self, token, endpoints::my_tasks(&self.http, &self.base_url, token).await)
/// ```
#[macro_export]
macro_rules! session_call {
    ($self:expr, $token:ident, $call:expr) => {{
        let __secret = $self.session_store.token();
        let $token: Option<&str> =
            __secret.as_ref().map(|s| ::secrecy::ExposeSecret::expose_secret(s));
        match $call {
            Err($crate::error::ClientError::ApiError { status, .. })
                if $crate::error::ClientError::is_auth_status(status) =>
            {
                Err($self.end_session(status))
            }
            other => other,
        }
    }};
}

/// Client for the project dashboard backend.
///
/// Construct with [`ProjectClient::builder()`]. Methods take `&self`; the
/// client can be shared between tasks behind an `Arc`.
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use projdash_client::{FileSessionStore, ProjectClient, Router};
///
/// let router = Arc::new(Router::new());
/// let client = ProjectClient::builder()
///     .base_url("http://localhost:5000/api")
///     .session_store(Arc::new(FileSessionStore::new("session.json")))
///     .navigator(router.clone())
///     .build()?;
/// let tasks = client.my_tasks().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProjectClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_store: Arc<dyn SessionStore>,
    pub(crate) navigator: Arc<dyn Navigator>,
}

impl ProjectClient {
    /// Create a new client builder.
    pub fn builder() -> builder::ProjectClientBuilder {
        builder::ProjectClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.session_store
    }

    /// Cached profile of the logged-in user, without a network call.
    pub fn current_user(&self) -> Option<User> {
        self.session_store.user()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session_store.token().is_some()
    }

    /// Clear the session after the backend rejected it and send the view to login.
    pub(crate) fn end_session(&self, status: u16) -> ClientError {
        warn!(status, "Backend rejected session, logging out");
        if let Err(e) = self.session_store.clear() {
            error!(error = %e, "Failed to clear rejected session");
        }
        self.navigator.redirect(LOGIN_PATH);
        ClientError::SessionExpired { status }
    }

    /// Await `fut` unless `token` is cancelled first.
    pub async fn cancellable<T, F>(&self, token: &CancellationToken, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        token.run(fut).await.unwrap_or(Err(ClientError::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::navigation::NoopNavigator;
    use crate::session::{MemorySessionStore, Session};

    fn client_with(store: Arc<MemorySessionStore>) -> ProjectClient {
        ProjectClient::builder()
            .base_url("http://localhost:5000/api/")
            .session_store(store)
            .navigator(Arc::new(NoopNavigator))
            .build()
            .unwrap()
    }

    fn admin() -> User {
        User {
            id: "a1".into(),
            name: "Admin".into(),
            email: "admin@college.edu".into(),
            role: Role::Admin,
            department: None,
            phone: None,
            roll_number: None,
            team_id: None,
        }
    }

    #[test]
    fn test_end_session_clears_store() {
        let store = Arc::new(MemorySessionStore::with_session(Session::new("t", admin())));
        let client = client_with(store.clone());
        assert!(client.is_logged_in());

        let err = client.end_session(401);
        assert!(matches!(err, ClientError::SessionExpired { status: 401 }));
        assert!(!client.is_logged_in());
        assert!(client.current_user().is_none());
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = client_with(Arc::new(MemorySessionStore::new()));
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }

    #[tokio::test]
    async fn test_cancellable_reports_cancelled() {
        let client = client_with(Arc::new(MemorySessionStore::new()));
        let token = CancellationToken::new();
        token.cancel();
        let result: Result<u8> = client.cancellable(&token, async { Ok(1) }).await;
        assert!(matches!(result, Err(ClientError::Cancelled)));
    }
}
