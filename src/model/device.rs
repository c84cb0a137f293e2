use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

fn default_connected() -> bool {
    true
}

/// A SoraCam compatible camera registered to the operator
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Device identifier
    pub device_id: String,
    /// Name given to the device in the console
    #[serde(default)]
    pub name: Option<String>,
    /// Product name, e.g. `ATOM Cam 2`
    #[serde(default)]
    pub product_display_name: Option<String>,
    /// Firmware running on the device
    #[serde(default)]
    pub firmware_version: Option<String>,
    /// Whether the device is currently online; assumed online when absent
    #[serde(default = "default_connected")]
    pub connected: bool,
    /// Last time the device connected, in epoch milliseconds
    #[serde(default)]
    pub last_connected_time: Option<i64>,
    /// Power state reported by the device
    #[serde(default)]
    pub power_state: Option<String>,
}

/// Summary of a device that is not connected
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfflineDevice {
    /// Device identifier
    pub device_id: String,
    /// Name given to the device in the console
    pub device_name: Option<String>,
    /// Last time the device connected, in epoch milliseconds
    pub last_connection: Option<i64>,
}

impl From<&Device> for OfflineDevice {
    fn from(device: &Device) -> Self {
        Self {
            device_id: device.device_id.clone(),
            device_name: device.name.clone(),
            last_connection: device.last_connected_time,
        }
    }
}

/// Keeps the devices that are not connected, in their original order
#[must_use]
pub fn offline_devices(devices: &[Device]) -> Vec<OfflineDevice> {
    devices
        .iter()
        .filter(|device| !device.connected)
        .map(OfflineDevice::from)
        .collect()
}
