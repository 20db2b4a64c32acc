//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` and view refusals to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see `main` and `cancellation`).
//!
//! Invariants:
//! - Exit codes 1-6 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use projdash_client::{ClientError, Role};
use thiserror::Error;

/// Structured exit codes for projdash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - bad credentials, no session, or the backend
    /// ended the session.
    ///
    /// Scripts should run `projdash login` again.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or unusable base URL.
    ConnectionError = 3,

    /// Resource not found - team, task, meeting, or view.
    NotFound = 4,

    /// Validation error - bad input or a rule the view enforces.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - the role cannot open this view.
    PermissionDenied = 6,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::SessionExpired { status: 403 } => ExitCode::PermissionDenied,
            ClientError::SessionExpired { .. } => ExitCode::AuthenticationFailed,

            ClientError::Timeout => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::HttpError(_) => ExitCode::GeneralError,

            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::ApiError {
                status: 400 | 409 | 422,
                ..
            } => ExitCode::ValidationError,
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,
            ClientError::ApiError { .. } => ExitCode::GeneralError,

            ClientError::InvalidRequest(_) => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,

            ClientError::Cancelled => ExitCode::Interrupted,
            ClientError::SessionStore(_) => ExitCode::GeneralError,
        }
    }
}

/// Refusals raised by the CLI before any request is sent.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Not logged in. Run `projdash login` first.")]
    NotLoggedIn,

    #[error("The {role} role cannot open {path}")]
    Forbidden { role: Role, path: String },

    #[error("No view at {0}")]
    UnknownView(String),

    #[error("{0} not found")]
    MissingItem(String),

    #[error("{0}")]
    RuleViolation(String),
}

impl From<&ViewError> for ExitCode {
    fn from(err: &ViewError) -> Self {
        match err {
            ViewError::NotLoggedIn => ExitCode::AuthenticationFailed,
            ViewError::Forbidden { .. } => ExitCode::PermissionDenied,
            ViewError::UnknownView(_) | ViewError::MissingItem(_) => ExitCode::NotFound,
            ViewError::RuleViolation(_) => ExitCode::ValidationError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError when nothing in the chain is recognized.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(view_err) = cause.downcast_ref::<ViewError>() {
                return ExitCode::from(view_err);
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "http://localhost:5000/api/admin/users".to_string(),
            message: "failed".to_string(),
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::PermissionDenied.as_i32(), 6);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_auth_errors() {
        let err = ClientError::AuthFailed("Invalid credentials".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationFailed);
        let err = ClientError::SessionExpired { status: 401 };
        assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationFailed);
    }

    #[test]
    fn test_forbidden_session_teardown_is_permission_denied() {
        let err = ClientError::SessionExpired { status: 403 };
        assert_eq!(ExitCode::from(&err), ExitCode::PermissionDenied);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ExitCode::from(&api_error(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&api_error(422)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&api_error(400)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::GeneralError);
    }

    #[test]
    fn test_connection_errors() {
        assert_eq!(ExitCode::from(&ClientError::Timeout), ExitCode::ConnectionError);
        let err = ClientError::InvalidUrl("ftp://x".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ConnectionError);
    }

    #[test]
    fn test_validation_errors() {
        let err = ClientError::InvalidRequest("title is required".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
    }

    #[test]
    fn test_view_errors() {
        assert_eq!(
            ExitCode::from(&ViewError::NotLoggedIn),
            ExitCode::AuthenticationFailed
        );
        let forbidden = ViewError::Forbidden {
            role: Role::Student,
            path: "/admin/users".to_string(),
        };
        assert_eq!(ExitCode::from(&forbidden), ExitCode::PermissionDenied);
        assert_eq!(forbidden.to_string(), "The student role cannot open /admin/users");
        let missing = ViewError::MissingItem("Task 'task-9'".to_string());
        assert_eq!(ExitCode::from(&missing), ExitCode::NotFound);
        assert_eq!(missing.to_string(), "Task 'task-9' not found");
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err: anyhow::Result<()> = Err(api_error(404)).context("Loading team");
        assert_eq!(err.unwrap_err().exit_code(), ExitCode::NotFound);

        let err: anyhow::Result<()> = Err(ViewError::NotLoggedIn).context("Opening /profile");
        assert_eq!(err.unwrap_err().exit_code(), ExitCode::AuthenticationFailed);
    }

    #[test]
    fn test_unknown_errors_are_general() {
        assert_eq!(anyhow::anyhow!("boom").exit_code(), ExitCode::GeneralError);
    }
}
