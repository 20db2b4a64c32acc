//! Common types shared across backend API models.
//!
//! This module contains response wrappers and the error body shape. It does
//! NOT contain resource-specific models.

use serde::{Deserialize, Serialize};

/// A response that may or may not be wrapped in a `{"data": ...}` envelope.
///
/// Different backend routes disagree on this, so both shapes are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MaybeWrapped<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> MaybeWrapped<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(value) => value,
        }
    }
}

/// Error body returned by the backend on non-2xx responses.
///
/// Routes use `message`, `error`, `detail` or `msg` interchangeably.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
    pub detail: Option<String>,
    pub msg: Option<String>,
}

impl ErrorBody {
    /// First non-blank message field, in priority order.
    pub fn best_message(&self) -> Option<&str> {
        [&self.message, &self.error, &self.detail, &self.msg]
            .into_iter()
            .filter_map(|m| m.as_deref())
            .map(str::trim)
            .find(|m| !m.is_empty())
    }
}

/// Plain acknowledgement returned by mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
