//! Exponential-backoff retry for remote calls.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use pickr_logging::pickr_warn;

/// Default number of attempts, including the first one.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay before the first retry (1 second).
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 1_000;

/// Default cap on any single delay (10 seconds).
pub const DEFAULT_MAX_DELAY_MS: u64 = 10_000;

/// How many times to attempt an operation and how long to wait in between.
///
/// The delay starts at `initial_delay` and doubles after every failed
/// attempt, never exceeding `max_delay`. There is no jitter; total waiting is
/// bounded by `max_attempts * max_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial attempt).
    pub max_attempts: u32,
    /// Delay after the first failure.
    pub initial_delay: Duration,
    /// Maximum delay cap.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay: Duration::from_millis(DEFAULT_INITIAL_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_MAX_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            max_delay,
        }
    }

    /// A single attempt, no retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay before retry number `retry` (1 is the first retry).
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.initial_delay
            .saturating_mul(factor)
            .min(self.max_delay)
    }

    /// Runs `operation` until it succeeds, fails fatally, or attempts run out.
    ///
    /// After a failure `is_retryable` decides whether to continue; a fatal
    /// error is returned at once without waiting. When every attempt fails the
    /// last error is returned.
    pub async fn run<T, E, F, Fut, R>(&self, is_retryable: R, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        R: Fn(&E) -> bool,
        E: Display,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            let err = match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };
            if attempt >= max_attempts || !is_retryable(&err) {
                return Err(err);
            }

            let delay = self.delay_for_retry(attempt);
            pickr_warn!(
                "Attempt {}/{} failed: {}; retrying in {:?}",
                attempt,
                max_attempts,
                err,
                delay
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}
