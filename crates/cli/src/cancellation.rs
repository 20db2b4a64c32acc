//! CLI cancellation helpers.
//!
//! Responsibilities:
//! - Recognize user-initiated cancellation (Ctrl+C) in an `anyhow::Error`.
//! - Centralize the cancellation message.
//!
//! Does NOT handle:
//! - The token itself (`projdash_client::CancellationToken`).
//! - Installing the signal handler (see `main`).

use projdash_client::ClientError;

/// Returns true if this error represents a cancelled request.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<ClientError>(),
            Some(ClientError::Cancelled)
        )
    })
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_detects_cancelled_through_context() {
        let err: anyhow::Result<()> = Err(ClientError::Cancelled).context("Loading tasks");
        assert!(is_cancelled_error(&err.unwrap_err()));
    }

    #[test]
    fn test_other_errors_are_not_cancellation() {
        let err = anyhow::Error::new(ClientError::Timeout);
        assert!(!is_cancelled_error(&err));
        assert!(!is_cancelled_error(&anyhow::anyhow!("cancelled")));
    }
}
