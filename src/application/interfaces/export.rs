use crate::error::AppError;
use crate::model::export::ExportJobStatus;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Interface for image and video exports
#[async_trait]
pub trait ExportService: Send + Sync {
    /// Requests a still image export from the cloud recording
    ///
    /// # Arguments
    /// * `device_id` - The device identifier
    /// * `wide_angle_correction` - Apply the wide angle correction filter
    /// * `export_time` - Target time in epoch milliseconds, now when `None`
    ///
    /// # Returns
    /// * The accepted export, carrying its `export_id`
    async fn post_images_export_requests(
        &self,
        device_id: &str,
        wide_angle_correction: bool,
        export_time: Option<i64>,
    ) -> Result<ExportJobStatus, AppError>;

    /// Waits for an image export to complete and returns its final result
    async fn get_images_exports(
        &self,
        device_id: &str,
        export_id: &str,
    ) -> Result<ExportJobStatus, AppError>;

    /// Requests a video export of the cloud recording between `from` and `to`
    async fn post_videos_export_requests(
        &self,
        device_id: &str,
        from: i64,
        to: i64,
    ) -> Result<ExportJobStatus, AppError>;

    /// Waits for a video export to complete and returns its final result
    async fn get_videos_exports(
        &self,
        device_id: &str,
        export_id: &str,
    ) -> Result<ExportJobStatus, AppError>;

    /// Requests an image export and waits for its completion
    async fn export_image(
        &self,
        device_id: &str,
        wide_angle_correction: bool,
        export_time: Option<i64>,
    ) -> Result<ExportJobStatus, AppError>;

    /// Requests a video export and waits for its completion
    async fn export_video(
        &self,
        device_id: &str,
        from: i64,
        to: i64,
    ) -> Result<ExportJobStatus, AppError>;

    /// Downloads any file, e.g. an export URL, into `target_directory`
    async fn download_file_from_url(
        &self,
        target_url: &str,
        target_directory: &Path,
    ) -> Result<PathBuf, AppError>;

    /// Downloads the artifact of a completed export into `target_directory`
    async fn download_export(
        &self,
        export: &ExportJobStatus,
        target_directory: &Path,
    ) -> Result<PathBuf, AppError>;
}
