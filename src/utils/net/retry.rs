//! Retry mechanism with exponential backoff
//!
//! A failed fetch is retried after `2^attempt * base_delay` unless the
//! resource was not found or the attempt counter reached `max_retries`.

use crate::config::RetryConfig;
use crate::utils::error::{FetchError, FetchErrorKind};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// What to do with a failed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Re-issue the request after the delay
    RetryAfter(Duration),
    /// Surface the error
    GiveUp(GiveUpReason),
}

/// Why a failed fetch is not retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiveUpReason {
    NotFound,
    Exhausted,
    NotRetryable,
}

/// Retry policy applied to every identity provider request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.max_retries, Duration::from_millis(config.base_delay_ms))
    }
}

impl RetryPolicy {
    /// Create a new retry policy
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Backoff before the retry that follows failed attempt `attempt`
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Decide whether a failure on attempt `attempt` (0-based) is retried
    pub fn decide(&self, error: &FetchError, attempt: u32) -> RetryDecision {
        if error.status() == Some(404) || error.kind() == FetchErrorKind::NotFound {
            return RetryDecision::GiveUp(GiveUpReason::NotFound);
        }
        if error.kind() == FetchErrorKind::PassThrough {
            return RetryDecision::GiveUp(GiveUpReason::NotRetryable);
        }
        if attempt >= self.max_retries {
            return RetryDecision::GiveUp(GiveUpReason::Exhausted);
        }
        RetryDecision::RetryAfter(self.delay_for(attempt))
    }

    /// Run `f` until it succeeds or the policy gives up
    ///
    /// `f` receives the attempt counter, starting at 0. Waiting between
    /// attempts yields to the runtime instead of blocking the thread.
    pub async fn execute<F, Fut, T>(&self, label: &str, mut f: F) -> Result<T, FetchError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let mut attempt = 0;

        loop {
            match f(attempt).await {
                Ok(value) => {
                    if attempt > 0 {
                        debug!(label, attempt, "Retry succeeded");
                    }
                    return Ok(value);
                }
                Err(error) => match self.decide(&error, attempt) {
                    RetryDecision::RetryAfter(delay) => {
                        warn!(
                            label,
                            attempt,
                            status = ?error.status(),
                            "Request failed: {}, retrying in {:?}",
                            error,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                    RetryDecision::GiveUp(reason) => {
                        debug!(label, attempt, ?reason, "Giving up on request: {}", error);
                        return Err(error);
                    }
                },
            }
        }
    }
}
