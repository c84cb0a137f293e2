/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/

//! Client side throttling of SoraCam API requests
//!
//! Requests are spread over the configured period with a token bucket from
//! the `governor` crate, so bursts of polling or pagination calls are less
//! likely to be answered with HTTP 429.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Token bucket shared by every request issued through one client
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// One cell is replenished every `period_seconds / max_requests`; zero
    /// values fall back to one request per second and a burst of one.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);
        let replenish = Duration::from_secs(config.period_seconds)
            .checked_div(config.max_requests)
            .unwrap_or_default();

        let quota = Quota::with_period(replenish)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until the bucket allows one more request
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Takes a cell if one is available right now
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
