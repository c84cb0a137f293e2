/// Credential provider for the `/v1/auth` exchange
pub mod auth;
/// Public client implementing every service
pub mod client;
/// Application configuration module
pub mod config;
/// Export job polling
pub mod export;
/// Service interfaces
pub mod interfaces;
/// Continuation-token pagination
pub mod pagination;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
