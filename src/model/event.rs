/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort order accepted by the listing endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Newest first
    #[default]
    Desc,
    /// Oldest first
    Asc,
}

impl SortOrder {
    /// Query string value
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Desc => "desc",
            SortOrder::Asc => "asc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of an ATOM camera event
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AtomEventV1 {
    /// Start of the event in epoch milliseconds
    #[serde(default)]
    pub start_time: Option<i64>,
    /// End of the event in epoch milliseconds
    #[serde(default)]
    pub end_time: Option<i64>,
    /// Whether the event was recorded
    #[serde(default)]
    pub recording_status: Option<String>,
    /// Detection type, e.g. `motion` or `sound`
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    /// Thumbnail URL
    #[serde(default)]
    pub picture: Option<String>,
    /// Detected labels, e.g. `person`
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Vendor specific event details
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    /// ATOM camera payload
    #[serde(default)]
    pub atom_event_v1: Option<AtomEventV1>,
}

/// An event detected by a camera
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEvent {
    /// Device that reported the event
    pub device_id: String,
    /// Time of the event in epoch milliseconds
    #[serde(default)]
    pub event_time: i64,
    /// Event type, e.g. `atomEventV1`
    #[serde(default)]
    pub event_type: String,
    /// Event details
    #[serde(default)]
    pub event_info: EventInfo,
}

impl DeviceEvent {
    /// Labels attached to the event, empty when the payload has none
    #[must_use]
    pub fn labels(&self) -> &[String] {
        self.event_info
            .atom_event_v1
            .as_ref()
            .map(|event| event.labels.as_slice())
            .unwrap_or_default()
    }

    /// Whether the nested label list contains `label`
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels().iter().any(|l| l == label)
    }
}

/// Keeps the events carrying `label`, in their original order
#[must_use]
pub fn filter_by_label(events: Vec<DeviceEvent>, label: &str) -> Vec<DeviceEvent> {
    events.into_iter().filter(|ev| ev.has_label(label)).collect()
}

/// Parameters of an events listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsQuery {
    /// Device to query; all devices when `None`
    pub device_id: Option<String>,
    /// Page size requested from the service
    pub limit: u32,
    /// Sort order
    pub sort: SortOrder,
    /// Client side label filter
    pub label: Option<String>,
    /// Lower bound in epoch milliseconds
    pub from: Option<i64>,
    /// Upper bound in epoch milliseconds
    pub to: Option<i64>,
}

impl Default for EventsQuery {
    fn default() -> Self {
        Self {
            device_id: None,
            limit: 10,
            sort: SortOrder::Desc,
            label: None,
            from: None,
            to: None,
        }
    }
}

impl EventsQuery {
    /// Query for the events of one device
    #[must_use]
    pub fn for_device(device_id: impl Into<String>) -> Self {
        Self {
            device_id: Some(device_id.into()),
            ..Self::default()
        }
    }

    /// Query string parameters, `search_type=or` included
    ///
    /// Zero bounds are treated as unset.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("limit".to_string(), self.limit.to_string()),
            ("sort".to_string(), self.sort.to_string()),
        ];
        if let Some(from) = self.from.filter(|t| *t != 0) {
            params.push(("from".to_string(), from.to_string()));
        }
        if let Some(to) = self.to.filter(|t| *t != 0) {
            params.push(("to".to_string(), to.to_string()));
        }
        params.push(("search_type".to_string(), "or".to_string()));
        params
    }
}

/// A continuous recording period
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordingPeriod {
    /// Start of the recording in epoch milliseconds
    pub start_time: i64,
    /// End of the recording, absent while still recording
    #[serde(default)]
    pub end_time: Option<i64>,
}

/// One page of the recordings and events listing
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecordingsAndEvents {
    /// Recording periods
    #[serde(default)]
    pub records: Vec<RecordingPeriod>,
    /// Events inside the requested range
    #[serde(default)]
    pub events: Vec<DeviceEvent>,
}
