/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_COVERAGE_TYPE, DEFAULT_MAX_PAGES, DEFAULT_POLL_INTERVAL_MAX_SECS,
    DEFAULT_POLL_INTERVAL_SECS, DEFAULT_POLL_STEP_SECS, DEFAULT_POLL_TIMEOUT_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use crate::utils::config::{
    duration_to_millis, get_env_or_default, get_env_or_none, get_env_secs_or_default,
    secs_to_millis,
};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error};

/// Network coverage of a Soracom account, which selects the API host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoverageType {
    /// Japan coverage, `jp.api.soracom.io`
    #[default]
    Jp,
    /// Global coverage, `g.api.soracom.io`
    #[serde(rename = "g")]
    Global,
}

impl CoverageType {
    /// Short label used in the API host name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageType::Jp => "jp",
            CoverageType::Global => "g",
        }
    }

    /// Base URL of the API for this coverage, without trailing slash
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("https://{}.api.soracom.io", self.as_str())
    }
}

impl FromStr for CoverageType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jp" => Ok(CoverageType::Jp),
            "g" | "global" => Ok(CoverageType::Global),
            other => Err(AppError::InvalidInput(format!(
                "unknown coverage type '{other}', expected 'jp' or 'g'"
            ))),
        }
    }
}

impl fmt::Display for CoverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Long-lived SAM user or root credentials exchanged for an API token
pub struct Credentials {
    /// Authentication key ID (`keyId-...`)
    pub auth_key_id: String,
    /// Authentication key secret (`secret-...`), never serialized
    #[serde(skip_serializing, default)]
    pub auth_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Coverage type the endpoint was derived from
    pub coverage_type: CoverageType,
    /// Base URL for the Soracom REST API, without trailing slash
    pub base_url: String,
    /// Timeout in milliseconds for a single HTTP call
    pub timeout_ms: u64,
}

impl RestApiConfig {
    /// Gets the per call timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Wait schedule used while an export job is pending
pub struct PollConfig {
    /// First wait in milliseconds after a pending status
    pub initial_interval_ms: u64,
    /// Milliseconds added to the wait after every pending status
    pub step_ms: u64,
    /// Upper bound in milliseconds for a single wait
    pub max_interval_ms: u64,
    /// Overall time in milliseconds before the export is reported as timed out
    pub timeout_ms: u64,
}

impl PollConfig {
    /// Creates a poll schedule from explicit durations
    #[must_use]
    pub fn new(initial: Duration, step: Duration, max: Duration, timeout: Duration) -> Self {
        Self {
            initial_interval_ms: duration_to_millis(initial),
            step_ms: duration_to_millis(step),
            max_interval_ms: duration_to_millis(max),
            timeout_ms: duration_to_millis(timeout),
        }
    }

    /// First wait after a pending status, never above the cap
    #[must_use]
    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms.min(self.max_interval_ms))
    }

    /// Linear growth applied after every pending status
    #[must_use]
    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    /// Upper bound for a single wait
    #[must_use]
    pub fn max_interval(&self) -> Duration {
        Duration::from_millis(self.max_interval_ms)
    }

    /// Overall poll ceiling
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(
            get_env_secs_or_default("SORACAM_POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS),
            get_env_secs_or_default("SORACAM_POLL_STEP_SECS", DEFAULT_POLL_STEP_SECS),
            get_env_secs_or_default(
                "SORACAM_POLL_INTERVAL_MAX_SECS",
                DEFAULT_POLL_INTERVAL_MAX_SECS,
            ),
            get_env_secs_or_default("SORACAM_POLL_TIMEOUT_SECS", DEFAULT_POLL_TIMEOUT_SECS),
        )
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Guard applied to continuation-token listings
pub struct PaginationConfig {
    /// Maximum number of pages fetched by one listing call
    pub max_pages: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_pages: get_env_or_default("SORACAM_MAX_PAGES", DEFAULT_MAX_PAGES),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for client side throttling of API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: get_env_or_default("SORACAM_RATE_LIMIT_MAX_REQUESTS", 60),
            period_seconds: get_env_or_default("SORACAM_RATE_LIMIT_PERIOD_SECONDS", 60),
            burst_size: get_env_or_default("SORACAM_RATE_LIMIT_BURST_SIZE", 10),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the SoraCam API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Retry policy for rate limited requests
    pub retry: RetryConfig,
    /// Export status poll schedule
    pub poll: PollConfig,
    /// Pagination guard
    pub pagination: PaginationConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment and an optional `.env` file
    ///
    /// Unknown coverage types fall back to `jp` after logging an error.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let auth_key_id = get_env_or_default("SORACOM_AUTH_KEY_ID", String::new());
        let auth_key = get_env_or_default("SORACOM_AUTH_KEY", String::new());
        if auth_key_id.is_empty() {
            error!("SORACOM_AUTH_KEY_ID not found in environment variables or .env file");
        }
        if auth_key.is_empty() {
            error!("SORACOM_AUTH_KEY not found in environment variables or .env file");
        }

        let coverage_raw =
            get_env_or_default("SORACOM_COVERAGE_TYPE", DEFAULT_COVERAGE_TYPE.to_string());
        let coverage_type = coverage_raw.parse::<CoverageType>().unwrap_or_else(|e| {
            error!("{e}, using default");
            CoverageType::default()
        });

        Self::build(
            Credentials {
                auth_key_id,
                auth_key,
            },
            coverage_type,
        )
    }

    /// Creates a configuration for explicit credentials
    ///
    /// Timeouts, retry and poll settings still honour their environment overrides.
    pub fn with_credentials(
        coverage_type: CoverageType,
        auth_key_id: impl Into<String>,
        auth_key: impl Into<String>,
    ) -> Self {
        Self::build(
            Credentials {
                auth_key_id: auth_key_id.into(),
                auth_key: auth_key.into(),
            },
            coverage_type,
        )
    }

    /// Overrides the API base URL, e.g. to target a proxy
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn build(credentials: Credentials, coverage_type: CoverageType) -> Self {
        let base_url = get_env_or_none::<String>("SORACAM_API_ENDPOINT")
            .unwrap_or_else(|| coverage_type.endpoint())
            .trim_end_matches('/')
            .to_string();

        Config {
            credentials,
            rest_api: RestApiConfig {
                coverage_type,
                base_url,
                timeout_ms: secs_to_millis(get_env_or_default(
                    "SORACAM_REQUEST_TIMEOUT_SECS",
                    DEFAULT_REQUEST_TIMEOUT_SECS,
                )),
            },
            retry: RetryConfig::default(),
            poll: PollConfig::default(),
            pagination: PaginationConfig::default(),
            rate_limiter: RateLimiterConfig::default(),
        }
    }
}
