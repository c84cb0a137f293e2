use crate::error::AppError;
use crate::model::event::{DeviceEvent, EventsQuery, RecordingsAndEvents, SortOrder};
use crate::model::stream::StreamInfo;
use async_trait::async_trait;

/// Interface for events, recordings and archived streams
#[async_trait]
pub trait EventService: Send + Sync {
    /// Gets events of one device, or of every device when `query.device_id` is `None`
    ///
    /// Every page of the listing is fetched; `query.limit` is the page size.
    /// When `query.label` is set, only events whose `atomEventV1.labels`
    /// contain it are returned.
    async fn get_devices_events(&self, query: &EventsQuery) -> Result<Vec<DeviceEvent>, AppError>;

    /// Gets recording periods and events of a device, one entry per page
    ///
    /// # Arguments
    /// * `device_id` - The device identifier
    /// * `sort` - Sort order
    /// * `from` - Lower bound in epoch milliseconds
    /// * `to` - Upper bound in epoch milliseconds
    async fn get_recordings_and_events(
        &self,
        device_id: &str,
        sort: SortOrder,
        from: Option<i64>,
        to: Option<i64>,
    ) -> Result<Vec<RecordingsAndEvents>, AppError>;

    /// Gets the playlist of the cloud recording between `from` and `to`
    async fn get_stream(&self, device_id: &str, from: i64, to: i64)
    -> Result<StreamInfo, AppError>;
}
