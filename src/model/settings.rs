use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Settings exposed under `atomcam/settings/{setting}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomCamSetting {
    /// Watermark logo on recordings
    Logo,
    /// Motion detection
    Motion,
    /// Motion detection sensitivity
    MotionSensitivity,
    /// Motion tagging on live view
    MotionTagging,
    /// Night vision mode
    NightVision,
    /// Recording quality
    Quality,
    /// Image rotation
    Rotation,
    /// Sound detection
    Sound,
    /// Sound detection sensitivity
    SoundSensitivity,
    /// Status light
    StatusLight,
    /// Timestamp overlay
    Timestamp,
}

impl AtomCamSetting {
    /// Path segment of the setting resource
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AtomCamSetting::Logo => "logo",
            AtomCamSetting::Motion => "motion",
            AtomCamSetting::MotionSensitivity => "motion_sensitivity",
            AtomCamSetting::MotionTagging => "motion_tagging",
            AtomCamSetting::NightVision => "night_vision",
            AtomCamSetting::Quality => "quality",
            AtomCamSetting::Rotation => "rotation",
            AtomCamSetting::Sound => "sound",
            AtomCamSetting::SoundSensitivity => "sound_sensitivity",
            AtomCamSetting::StatusLight => "status_light",
            AtomCamSetting::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for AtomCamSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a single setting, `{"state": ...}` on the wire
///
/// Most settings use strings (`on`, `off`, `high`, ...); rotation uses a number.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingState {
    /// Current or requested value
    pub state: Value,
}

impl SettingState {
    /// Creates a state from anything convertible into JSON
    pub fn new(state: impl Into<Value>) -> Self {
        Self {
            state: state.into(),
        }
    }

    /// The value as a string, if it is one
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.state.as_str()
    }
}

/// All settings of an ATOM camera
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AtomCamSettings {
    /// Watermark logo
    #[serde(default)]
    pub logo: Option<Value>,
    /// Motion detection
    #[serde(default)]
    pub motion: Option<Value>,
    /// Motion detection sensitivity
    #[serde(default)]
    pub motion_sensitivity: Option<Value>,
    /// Motion tagging
    #[serde(default)]
    pub motion_tagging: Option<Value>,
    /// Night vision mode
    #[serde(default)]
    pub night_vision: Option<Value>,
    /// Recording quality
    #[serde(default)]
    pub quality: Option<Value>,
    /// Image rotation
    #[serde(default)]
    pub rotation: Option<Value>,
    /// Sound detection
    #[serde(default)]
    pub sound: Option<Value>,
    /// Sound detection sensitivity
    #[serde(default)]
    pub sound_sensitivity: Option<Value>,
    /// Status light
    #[serde(default)]
    pub status_light: Option<Value>,
    /// Timestamp overlay
    #[serde(default)]
    pub timestamp: Option<Value>,
    /// Settings added by newer firmware
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}
