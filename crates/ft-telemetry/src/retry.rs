//! Bounded retry with capped exponential backoff.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How many times to try a delivery and how long to wait in between.
///
/// The delay before attempt `n` (1-based, `n >= 2`) is
/// `min(min_delay · 2^(n−2), max_delay)`; there is no delay before the
/// first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts including the first.  `0` is treated as `1`.
    pub max_attempts: u32,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 5, min_delay_ms: 200, max_delay_ms: 5_000 }
    }
}

impl RetryPolicy {
    /// `max_attempts` attempts with no sleeping in between.
    pub fn immediate(max_attempts: u32) -> Self {
        Self { max_attempts, min_delay_ms: 0, max_delay_ms: 0 }
    }

    #[inline]
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    #[inline]
    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    #[inline]
    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    /// Back-off to wait before the 1-based `attempt`.
    pub fn delay_before(&self, attempt: u32) -> Duration {
        if attempt <= 1 {
            return Duration::ZERO;
        }
        let factor = 2u32.saturating_pow(attempt - 2);
        self.min_delay().saturating_mul(factor).min(self.max_delay())
    }
}
