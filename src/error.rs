/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/

//! Error types returned by every SoraCam client operation

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The authentication exchange (`/v1/auth`) failed
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A non-2xx response, or a 429 that outlived the retry budget
    #[error("http error {status}: {body}")]
    Http {
        /// Status of the last response observed
        status: StatusCode,
        /// Body of the last response observed
        body: String,
    },

    /// A single network call exceeded the configured request timeout
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The service reported the export job as failed
    #[error("export failed for device {device_id}, export {export_id}")]
    ExportFailed {
        /// Device the export belongs to
        device_id: String,
        /// Export job identifier
        export_id: String,
    },

    /// The export job did not reach a terminal state before the poll ceiling
    #[error("checking export status timed out for device {device_id}, export {export_id} after {elapsed:?}")]
    ExportTimeout {
        /// Device the export belongs to
        device_id: String,
        /// Export job identifier
        export_id: String,
        /// Time spent polling
        elapsed: Duration,
    },

    /// The server kept returning a continuation token past the page limit
    #[error("pagination limit of {0} pages reached")]
    PaginationLimit(u32),

    /// Transport level failure other than a timeout
    #[error("network error: {0}")]
    Network(reqwest::Error),

    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure while saving a download
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid caller input
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Returns the HTTP status carried by an [`AppError::Http`], if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else {
            AppError::Network(err)
        }
    }
}
