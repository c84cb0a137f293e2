/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    EXPORT_STATUS_COMPLETED, EXPORT_STATUS_FAILED, WIDE_ANGLE_CORRECTION_FILTER,
};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of media produced by an export job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image extracted from the cloud recording
    #[serde(rename = "images")]
    Image,
    /// Video clip cut from the cloud recording
    #[serde(rename = "videos")]
    Video,
}

impl MediaKind {
    /// Path segment of the export resource
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "images",
            MediaKind::Video => "videos",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of an export job on the service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportJob {
    /// Device the footage comes from
    pub device_id: String,
    /// Identifier returned by the export request
    pub export_id: String,
    /// Images or videos
    pub media: MediaKind,
}

impl ExportJob {
    /// Creates a job handle
    pub fn new(device_id: impl Into<String>, export_id: impl Into<String>, media: MediaKind) -> Self {
        Self {
            device_id: device_id.into(),
            export_id: export_id.into(),
            media,
        }
    }
}

/// State of an export job as derived from one status response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    /// Any non terminal status (`initializing`, `processing`, empty, ...)
    Pending,
    /// The artifact is ready
    Completed,
    /// The service gave up on the job
    Failed,
}

impl ExportState {
    /// Maps the wire status to a state
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        match status {
            EXPORT_STATUS_COMPLETED => ExportState::Completed,
            EXPORT_STATUS_FAILED => ExportState::Failed,
            _ => ExportState::Pending,
        }
    }
}

/// Export request acknowledgement and export status resource
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExportJobStatus {
    /// Export job identifier
    #[serde(default)]
    pub export_id: String,
    /// Device the footage comes from
    #[serde(default)]
    pub device_id: Option<String>,
    /// Raw status, e.g. `initializing`, `processing`, `completed`, `failed`
    #[serde(default)]
    pub status: String,
    /// Download URL, present once completed
    #[serde(default)]
    pub url: Option<String>,
    /// Time of the request in epoch milliseconds
    #[serde(default)]
    pub requested_time: Option<i64>,
    /// Completion time in epoch milliseconds
    #[serde(default)]
    pub completed_time: Option<i64>,
    /// Expiry of the download URL in epoch milliseconds
    #[serde(default)]
    pub expiry_time: Option<i64>,
    /// Filters applied to an image export
    #[serde(default)]
    pub image_filters: Option<Vec<String>>,
}

impl ExportJobStatus {
    /// State derived from the raw status
    #[must_use]
    pub fn state(&self) -> ExportState {
        ExportState::from_status(&self.status)
    }
}

/// Body of an image export request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageExportRequest {
    /// Target time in epoch milliseconds
    pub time: i64,
    /// Server side filters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_filters: Option<Vec<String>>,
}

impl ImageExportRequest {
    /// Builds the request, enabling wide angle correction when asked
    #[must_use]
    pub fn new(time: i64, wide_angle_correction: bool) -> Self {
        Self {
            time,
            image_filters: wide_angle_correction
                .then(|| vec![WIDE_ANGLE_CORRECTION_FILTER.to_string()]),
        }
    }
}

/// Body of a video export request, or of a stream lookup
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    /// Start in epoch milliseconds
    pub from: i64,
    /// End in epoch milliseconds
    pub to: i64,
}
