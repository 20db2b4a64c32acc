//! Navigation seam between the HTTP client and whatever renders views.
//!
//! The client never knows about routes beyond the two fixed entry points
//! below; it tells a [`Navigator`] where to go and the navigator decides
//! what that means (a router update, a CLI hint, nothing at all).

/// Login entry point. Target of every session teardown.
pub const LOGIN_PATH: &str = "/login";

/// Shown when a logged-in user opens a view their role may not see.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Receives redirects issued by the client.
pub trait Navigator: Send + Sync + std::fmt::Debug {
    fn redirect(&self, location: &str);
}

/// Navigator that ignores redirects, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect(&self, location: &str) {
        tracing::trace!(location, "Redirect ignored");
    }
}
