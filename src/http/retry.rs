//! Retry policy for transport failures.
//!
//! Only transport-level failures (connection errors, timeouts) are ever
//! retried. A received HTTP response — 429 and 5xx included — is terminal
//! and goes straight to classification: application-level errors are not
//! transient.

use std::time::Duration;

use crate::error::TransportError;

/// What to do after a failed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryDecision {
    pub retry: bool,
    pub delay: Duration,
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent one.
    pub base_delay: Duration,
    /// Cap on the computed delay.
    pub max_delay: Duration,
    /// Spread delays randomly across `[0, computed]` to avoid retry storms
    /// from fleets of clients backing off in lockstep. Off by default so the
    /// base, 2×base, 4×base sequence is exact.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            jitter: false,
        }
    }
}

impl RetryConfig {
    /// Decide whether to re-attempt after the given completed attempt
    /// (0-indexed: `attempt == 0` is the initial try).
    ///
    /// `TransportError` is the only input by construction — HTTP error
    /// responses never reach the retry policy.
    pub fn decide(&self, attempt: u32, _failure: &TransportError) -> RetryDecision {
        if attempt >= self.max_retries {
            return RetryDecision {
                retry: false,
                delay: Duration::ZERO,
            };
        }
        RetryDecision {
            retry: true,
            delay: self.delay_for_attempt(attempt),
        }
    }

    /// Delay after the given completed attempt (0-indexed):
    /// `base_delay * 2^attempt`, capped at `max_delay`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.base_delay.as_millis() as f64 * 2f64.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            capped * rand::random::<f64>()
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_double_without_jitter() {
        let config = RetryConfig {
            max_retries: 3,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            jitter: false,
        };
        assert_eq!(config.delay_for_attempt(0).as_millis(), 100);
        assert_eq!(config.delay_for_attempt(1).as_millis(), 200);
        assert_eq!(config.delay_for_attempt(2).as_millis(), 400);
    }

    #[test]
    fn test_delay_caps_at_max() {
        let config = RetryConfig {
            max_retries: 10,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(2000),
            jitter: false,
        };
        assert_eq!(config.delay_for_attempt(5).as_millis(), 2000);
    }

    #[test]
    fn test_decide_stops_at_budget() {
        let config = RetryConfig {
            max_retries: 2,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            jitter: false,
        };
        let failure = TransportError::Timeout;

        let first = config.decide(0, &failure);
        assert!(first.retry);
        assert_eq!(first.delay.as_millis(), 100);

        let second = config.decide(1, &failure);
        assert!(second.retry);
        assert_eq!(second.delay.as_millis(), 200);

        let exhausted = config.decide(2, &failure);
        assert!(!exhausted.retry);
    }

    #[test]
    fn test_zero_retries_never_retries() {
        let config = RetryConfig {
            max_retries: 0,
            ..RetryConfig::default()
        };
        assert!(!config.decide(0, &TransportError::Timeout).retry);
    }

    #[test]
    fn test_jitter_stays_within_computed_delay() {
        let config = RetryConfig {
            max_retries: 3,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            jitter: true,
        };
        for _ in 0..50 {
            let d = config.delay_for_attempt(2);
            assert!(d.as_millis() <= 400);
        }
    }
}
