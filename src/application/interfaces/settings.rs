use crate::error::AppError;
use crate::model::settings::{AtomCamSetting, AtomCamSettings, SettingState};
use async_trait::async_trait;

/// Interface for ATOM camera settings
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Gets every setting of a device
    async fn get_settings(&self, device_id: &str) -> Result<AtomCamSettings, AppError>;

    /// Gets one setting of a device
    async fn get_setting(
        &self,
        device_id: &str,
        setting: AtomCamSetting,
    ) -> Result<SettingState, AppError>;

    /// Changes one setting of a device
    async fn set_setting(
        &self,
        device_id: &str,
        setting: AtomCamSetting,
        value: &SettingState,
    ) -> Result<(), AppError>;
}
