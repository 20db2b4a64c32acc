//! Progress indicator for the projdash CLI.
//!
//! Responsibilities:
//! - Show a spinner while a backend call is outstanding.
//! - Ensure ALL progress output is written to STDERR (never stdout), so machine-readable
//!   command output (json/table/csv) is not contaminated.
//! - Allow global suppression via a caller-provided `enabled` boolean (driven by `--quiet`).
//!
//! Non-responsibilities:
//! - This module does not decide *when* progress should be shown; callers do.
//! - This module does not print command results; stdout remains reserved for results.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// An indefinite spinner for one backend call.
///
/// Always draws to STDERR; no-op when disabled. Dropping an unfinished
/// spinner clears its line so error output starts on a clean line.
pub(crate) struct Spinner {
    pb: Option<ProgressBar>,
}

impl Spinner {
    /// `enabled` should be `!quiet`.
    pub(crate) fn new(enabled: bool, label: impl Into<String>) -> Self {
        if !enabled {
            return Self { pb: None };
        }

        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(label.into());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb: Some(pb) }
    }

    /// Remove the spinner line once the result is ready to print.
    pub(crate) fn finish(&self) {
        if let Some(pb) = &self.pb {
            pb.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}
