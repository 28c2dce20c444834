//! Test clock — a virtual `Clock` that advances instantly on every sleep.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use heartline_core::clock::Clock;

/// A clock whose `sleep` returns immediately after moving virtual time
/// forward. Every requested sleep is recorded in order.
///
/// Only suitable for strictly sequential code: concurrently spawned timers
/// would all see time jump. Use `#[tokio::test(start_paused = true)]` with
/// `TokioClock` for sessions that spawn background work.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<Duration>,
    sleeps: Mutex<Vec<Duration>>,
}

impl ManualClock {
    /// Create a clock at virtual time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves virtual time forward without recording a sleep.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    /// Every sleep requested so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    /// Sum of every requested sleep.
    pub fn total_slept(&self) -> Duration {
        self.sleeps().into_iter().sum()
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock().unwrap()
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
        self.advance(duration);
        tokio::task::yield_now().await;
    }
}
