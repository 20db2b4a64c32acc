//! View lifetimes and load state.
//!
//! A view (a CLI command, a dashboard panel) owns a [`ViewScope`]. Requests
//! started through the scope stop mattering once the view goes away: their
//! results are discarded instead of written into state that nobody renders.
//!
//! # Invariants
//! - After the scope is cancelled, `load` never writes to the state it was given.
//! - Dropping a scope cancels it.

use std::future::Future;

use crate::cancellation::CancellationToken;
use crate::error::ClientError;

/// Loading state of a single view resource.
#[derive(Debug, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(ClientError),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Consume a finished state. `None` while idle or loading.
    pub fn into_result(self) -> Option<Result<T, ClientError>> {
        match self {
            Self::Loaded(value) => Some(Ok(value)),
            Self::Failed(err) => Some(Err(err)),
            Self::Idle | Self::Loading => None,
        }
    }
}

/// Cancellation scope tied to one view's lifetime.
#[derive(Debug, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope that is also cancelled when `parent` is (e.g. on Ctrl-C).
    pub fn child_of(parent: &CancellationToken) -> Self {
        Self {
            token: parent.child_token(),
        }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Run `fut` and record its outcome in `state`.
    ///
    /// Sets `Loading` first, then `Loaded`/`Failed`. If the scope is
    /// cancelled before the future finishes, the future is dropped and
    /// `state` keeps whatever it held at that moment. Returns whether the
    /// outcome was applied.
    pub async fn load<T, F>(&self, state: &mut LoadState<T>, fut: F) -> bool
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        if self.is_cancelled() {
            return false;
        }
        *state = LoadState::Loading;

        let Some(outcome) = self.token.run(fut).await else {
            tracing::debug!("View closed before load finished, discarding result");
            return false;
        };
        // The future may have completed in the same poll that observed cancellation
        if self.is_cancelled() {
            return false;
        }

        *state = match outcome {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err),
        };
        true
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
