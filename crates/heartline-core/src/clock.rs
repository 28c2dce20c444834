//! Clock abstraction for determinism.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

/// Abstraction over elapsed time and timed waits.
///
/// The narrative only ever suspends through [`Clock::sleep`], so swapping the
/// implementation swaps real timers for virtual ones.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Time elapsed since the clock's epoch. Never decreases.
    fn now(&self) -> Duration;

    /// Suspends the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Production clock backed by `tokio::time`.
///
/// Under `#[tokio::test(start_paused = true)]` this clock runs on tokio's
/// virtual time, which auto-advances whenever every task is idle.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    epoch: Instant,
}

impl TokioClock {
    /// Creates a clock whose epoch is the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Shorthand for building millisecond durations from the narrative's tables.
#[must_use]
pub const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
