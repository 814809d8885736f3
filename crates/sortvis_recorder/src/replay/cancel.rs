//! Cooperative cancellation
//!
//! A token is created per playback run. Cancelling it never interrupts
//! work in progress; it only makes the run's next checkpoint, or the timed
//! wait it is suspended in, return early.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Shared cancellation flag with async notification
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    ///
    /// Returns true only for the first request.
    pub fn cancel(&self) -> bool {
        let first = !self.inner.cancelled.swap(true, Ordering::AcqRel);
        if first {
            self.inner.notify.notify_waiters();
        }
        first
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Resolve once cancellation has been requested
    pub async fn cancelled(&self) {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            // Register before checking the flag so a concurrent cancel
            // cannot slip between the check and the await.
            notified.as_mut().enable();

            if self.is_cancelled() {
                return;
            }

            notified.await;
        }
    }

    /// Check whether two handles share the same token
    pub fn same_as(&self, other: &CancellationToken) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// How a timed wait ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The full duration passed
    Elapsed,
    /// Cancellation cut the wait short
    Cancelled,
}

/// Wait for `duration`, resolving early if `token` is cancelled.
///
/// An already cancelled token resolves immediately.
pub async fn wait(duration: Duration, token: &CancellationToken) -> WaitOutcome {
    if token.is_cancelled() {
        return WaitOutcome::Cancelled;
    }

    tokio::select! {
        _ = tokio::time::sleep(duration) => WaitOutcome::Elapsed,
        _ = token.cancelled() => WaitOutcome::Cancelled,
    }
}
