/// Environment variable helpers
pub mod config;
/// Streaming file downloads
pub mod download;
/// Module containing logging utilities
pub mod logger;

pub use logger::*;
