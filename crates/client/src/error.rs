//! Error types for the dashboard client.

use thiserror::Error;

use crate::session::SessionStoreError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Login rejected by the backend (bad credentials, disabled account).
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Transport-level failure: connect errors, timeouts, body read errors.
    #[error("HTTP error: {0}")]
    HttpError(#[source] reqwest::Error),

    /// The request exceeded the client's fixed timeout.
    #[error("Request timed out")]
    Timeout,

    /// Non-2xx response that is not an authorization failure.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The backend answered 401/403 on an authenticated call.
    ///
    /// By the time the caller sees this, the stored session has been cleared
    /// and the navigator sent to the login view.
    #[error("Session expired or access denied (HTTP {status}), please log in again")]
    SessionExpired { status: u16 },

    /// Response body did not match the expected DTO.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request rejected before it was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The owning view was closed before the call finished.
    #[error("Request cancelled")]
    Cancelled,

    /// Reading or writing the persisted session failed.
    #[error("Session storage error: {0}")]
    SessionStore(#[from] SessionStoreError),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::HttpError(e)
        }
    }
}

impl ClientError {
    /// HTTP statuses that tear down the session.
    pub fn is_auth_status(status: u16) -> bool {
        matches!(status, 401 | 403)
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_) | Self::SessionExpired { .. })
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } | Self::SessionExpired { status } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Short human-readable message for toasts and CLI output.
    ///
    /// Uses the backend's own message when there is one.
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthFailed(message) => message.clone(),
            Self::ApiError { message, .. } => message.clone(),
            Self::SessionExpired { .. } => "Your session has expired. Please log in again.".into(),
            Self::Timeout => "The server took too long to respond.".into(),
            Self::HttpError(e) if e.is_connect() => "Could not reach the server.".into(),
            Self::HttpError(_) => "Something went wrong. Please try again.".into(),
            Self::InvalidResponse(_) => "The server sent an unexpected response.".into(),
            Self::InvalidRequest(message) => message.clone(),
            Self::InvalidUrl(message) => format!("Invalid URL: {message}"),
            Self::Cancelled => "Request cancelled.".into(),
            Self::SessionStore(_) => "Could not access the saved session.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses() {
        assert!(ClientError::is_auth_status(401));
        assert!(ClientError::is_auth_status(403));
        assert!(!ClientError::is_auth_status(400));
        assert!(!ClientError::is_auth_status(404));
        assert!(!ClientError::is_auth_status(500));
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(ClientError::SessionExpired { status: 401 }.is_auth_error());
        assert!(ClientError::AuthFailed("bad".into()).is_auth_error());
        assert!(!ClientError::Cancelled.is_auth_error());
        let api = ClientError::ApiError {
            status: 500,
            url: "http://x/y".into(),
            message: "boom".into(),
        };
        assert!(!api.is_auth_error());
    }

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ClientError::ApiError {
            status: 422,
            url: "http://x/student/tasks/1/submit".into(),
            message: "Submission URL is required".into(),
        };
        assert_eq!(err.user_message(), "Submission URL is required");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_timeout_message() {
        let err = ClientError::Timeout;
        assert_eq!(err.status(), None);
        assert!(!err.is_auth_error());
        assert!(err.user_message().contains("too long"));
    }

    #[test]
    fn test_session_expired_message() {
        let err = ClientError::SessionExpired { status: 403 };
        assert_eq!(err.status(), Some(403));
        assert!(err.user_message().contains("log in"));
    }
}
