use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// One playable segment of an archived stream
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayListItem {
    /// HLS or MPEG-DASH manifest URL
    pub url: String,
    /// Start of the segment in epoch milliseconds
    #[serde(default)]
    pub from: Option<i64>,
    /// End of the segment in epoch milliseconds
    #[serde(default)]
    pub to: Option<i64>,
}

/// Archived stream lookup result
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StreamInfo {
    /// Playable segments covering the requested range
    #[serde(default)]
    pub play_list: Vec<PlayListItem>,
}
