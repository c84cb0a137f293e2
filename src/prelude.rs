/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/

//! # SoraCam Client Prelude
//!
//! Imports the types and traits needed for most SoraCam API interactions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use soracam_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let devices = client.get_devices().await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the SoraCam API client
pub use crate::application::config::{
    Config, CoverageType, Credentials, PaginationConfig, PollConfig, RateLimiterConfig,
    RestApiConfig,
};

/// Retry configuration for rate limited requests
pub use crate::model::retry::RetryConfig;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client implementing every service
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::{
    device::DeviceService, event::EventService, export::ExportService,
    settings::SettingsService,
};

/// Credential provider
pub use crate::application::auth::Auth;

/// Request executor
pub use crate::model::http::HttpClient;

/// Export polling
pub use crate::application::export::{Clock, ExportPoller, PollSchedule, TokioClock};

// ============================================================================
// MODELS
// ============================================================================

/// Device models
pub use crate::model::device::{Device, OfflineDevice};

/// Event and recording models
pub use crate::model::event::{
    AtomEventV1, DeviceEvent, EventInfo, EventsQuery, RecordingPeriod, RecordingsAndEvents,
    SortOrder,
};

/// Export models
pub use crate::model::export::{ExportJob, ExportJobStatus, ExportState, MediaKind};

/// Settings models
pub use crate::model::settings::{AtomCamSetting, AtomCamSettings, SettingState};

/// Stream models
pub use crate::model::stream::{PlayListItem, StreamInfo};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup
pub use crate::utils::logger::setup_logger;

/// Standard path type used by download operations
pub use std::path::{Path, PathBuf};
