//! Cancellation tokens for in-flight requests.
//!
//! Responsibilities:
//! - A clonable token that views and commands hand to their requests.
//! - Racing a future against the token ([`CancellationToken::run`]).
//!
//! Does NOT handle:
//! - Signal handling (the CLI wires Ctrl-C to a token).
//! - Load-state bookkeeping (see [`crate::view`]).
//!
//! Invariants:
//! - Once cancelled, a token stays cancelled.
//! - Clones share state: cancelling any clone cancels all of them.
//! - Cancelling a token cancels every child token derived from it, never the reverse.

use std::future::Future;
use std::sync::{
    Arc, Mutex, Weak,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Shared {
    cancelled: AtomicBool,
    notify: Notify,
    children: Mutex<Vec<Weak<Shared>>>,
}

impl Shared {
    fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        self.notify.notify_waiters();
        let children = std::mem::take(
            &mut *self
                .children
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        );
        for child in children.iter().filter_map(Weak::upgrade) {
            child.cancel();
        }
    }
}

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    shared: Arc<Shared>,
}

impl CancellationToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the token and all of its children. Idempotent.
    pub fn cancel(&self) {
        self.shared.cancel();
    }

    /// A token that is cancelled with this one but can also be cancelled alone.
    pub fn child_token(&self) -> Self {
        let child = Self::new();
        {
            let mut children = self
                .shared
                .children
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if !self.is_cancelled() {
                children.retain(|c| c.strong_count() > 0);
                children.push(Arc::downgrade(&child.shared));
                return child;
            }
        }
        child.cancel();
        child
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::SeqCst)
    }

    /// Resolve once the token is cancelled.
    pub async fn cancelled(&self) {
        // Register interest before checking the flag so a concurrent cancel is not missed
        let notified = self.shared.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Drive `fut` to completion unless the token fires first.
    ///
    /// Returns `None` when cancelled; the future is dropped at that point.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            output = fut => Some(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_cancel_is_shared_and_idempotent() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());

        token.cancel();
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_child_follows_parent_but_not_reverse() {
        let parent = CancellationToken::new();
        let child = parent.child_token();
        let sibling = parent.child_token();

        child.cancel();
        assert!(!parent.is_cancelled());
        assert!(!sibling.is_cancelled());

        parent.cancel();
        assert!(sibling.is_cancelled());

        let late = parent.child_token();
        assert!(late.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_wakes_waiter() {
        let token = CancellationToken::new();
        let waiter = {
            let token = token.clone();
            tokio::spawn(async move { token.cancelled().await })
        };
        tokio::task::yield_now().await;
        token.cancel();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
    }

    #[tokio::test]
    async fn test_run_completes_when_not_cancelled() {
        let token = CancellationToken::new();
        assert_eq!(token.run(async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn test_run_drops_future_when_cancelled() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            canceller.cancel();
        });

        let result = token
            .run(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                1
            })
            .await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_run_on_already_cancelled_token() {
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(token.run(async { 1 }).await, None);
    }
}
