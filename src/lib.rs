//! # SoraCam Client
//!
//! Async client for the Soracom SoraCam cloud camera API.
//!
//! ## Features
//!
//! - Authentication with a SAM user auth key, refreshed for every request
//! - Device listing and offline detection
//! - Event, recording and archived stream queries with automatic pagination
//! - Still image and video exports, polled until completion, and download
//! - ATOM camera settings
//! - Retry of rate limited (HTTP 429) requests and client side throttling
//!
//! ## Configuration
//!
//! [`Config::new`](application::config::Config::new) reads a `.env` file and
//! the environment:
//!
//! ```text
//! SORACOM_AUTH_KEY_ID=keyId-xxxx
//! SORACOM_AUTH_KEY=secret-xxxx
//! SORACOM_COVERAGE_TYPE=jp
//! SORACAM_REQUEST_TIMEOUT_SECS=60
//! SORACAM_MAX_RETRIES=3
//! SORACAM_RETRY_INTERVAL_SECS=3
//! SORACAM_POLL_INTERVAL_SECS=10
//! SORACAM_POLL_STEP_SECS=10
//! SORACAM_POLL_INTERVAL_MAX_SECS=60
//! SORACAM_POLL_TIMEOUT_SECS=900
//! SORACAM_MAX_PAGES=1000
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use soracam_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new())?;
//!
//!     for device in client.get_offline_devices().await? {
//!         println!("{} is offline", device.device_id);
//!     }
//!
//!     let export = client.export_image("7C12345678AB", true, None).await?;
//!     let path = client.download_export(&export, Path::new(".")).await?;
//!     println!("saved {}", path.display());
//!     Ok(())
//! }
//! ```

/// Application layer: client, services, configuration and polling
pub mod application;
/// Library wide constants and defaults
pub mod constants;
/// Error types
pub mod error;
/// Wire records and the HTTP request executor
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Environment, download and logging helpers
pub mod utils;

/// Re-export of the configuration module
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
