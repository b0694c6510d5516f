//! Trailing-edge debounce for search input.

use std::future;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Holds the latest pushed value until `delay` passes without a newer one.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending value and restart the idle timer.
    pub fn push(&mut self, value: T) {
        self.pending = Some((Instant::now() + self.delay, value));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Wait for the pending value to settle. Never resolves when nothing is
    /// pending.
    ///
    /// Cancel-safe: dropping the future before it resolves keeps the value
    /// pending, so it can sit in a `tokio::select!` loop.
    pub async fn ready(&mut self) -> T {
        let deadline = match &self.pending {
            Some((deadline, _)) => *deadline,
            None => return future::pending().await,
        };
        sleep_until(deadline).await;
        match self.pending.take() {
            Some((_, value)) => value,
            None => future::pending().await,
        }
    }
}
