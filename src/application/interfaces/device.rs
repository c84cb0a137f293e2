use crate::error::AppError;
use crate::model::device::{Device, OfflineDevice};
use async_trait::async_trait;

/// Interface for the device service
#[async_trait]
pub trait DeviceService: Send + Sync {
    /// Gets every SoraCam device of the operator
    async fn get_devices(&self) -> Result<Vec<Device>, AppError>;

    /// Gets one device
    ///
    /// # Arguments
    /// * `device_id` - The device identifier
    async fn get_device(&self, device_id: &str) -> Result<Device, AppError>;

    /// Gets the devices that are not connected
    ///
    /// A device without a `connected` field is considered online.
    async fn get_offline_devices(&self) -> Result<Vec<OfflineDevice>, AppError>;
}
