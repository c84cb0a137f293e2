/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_INTERVAL_SECS};
use crate::utils::config::{duration_to_millis, get_env_or_default, secs_to_millis};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for retrying requests answered with HTTP 429
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total number of attempts for one request, including the first one
    pub max_attempts: u32,
    /// Pause in milliseconds between two rate limited attempts
    pub retry_interval_ms: u64,
}

impl RetryConfig {
    /// Creates a retry configuration from environment variables or defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that never retries
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            retry_interval_ms: 0,
        }
    }

    /// Creates a retry configuration with a given attempt budget and pause
    #[must_use]
    pub fn with_attempts_and_interval(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            retry_interval_ms: duration_to_millis(interval),
        }
    }

    /// Gets the attempt budget (never less than one)
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Gets the pause between two rate limited attempts
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.retry_interval_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        let max_attempts = get_env_or_default("SORACAM_MAX_RETRIES", DEFAULT_MAX_RETRIES);
        let interval_secs =
            get_env_or_default("SORACAM_RETRY_INTERVAL_SECS", DEFAULT_RETRY_INTERVAL_SECS);

        Self {
            max_attempts,
            retry_interval_ms: secs_to_millis(interval_secs),
        }
    }
}
