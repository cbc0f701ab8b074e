//! Injectable suspension used to simulate external I/O.

use std::time::Duration;
use async_trait::async_trait;

/// Suspends the calling task for a simulated round-trip.
///
/// Production code uses [`TokioDelay`]; tests substitute [`NoDelay`] or run
/// [`TokioDelay`] under a paused Tokio clock.
#[async_trait]
pub trait Delay: Send + Sync {
    /// Suspends for `duration`. Never fails and cannot be interrupted.
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock delay backed by `tokio::time::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately, yielding once to the scheduler.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn sleep(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}
