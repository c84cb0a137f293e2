/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/

//! SoraCam API client
//!
//! This module provides the client that callers use:
//! - Fresh authentication for every request
//! - Retry of rate limited requests
//! - Pagination of listings
//! - Polling of export jobs until completion
//!
//! # Example
//! ```ignore
//! use soracam_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let export = client.export_image("7C12345678AB", true, None).await?;
//! let path = client.download_export(&export, Path::new("/tmp")).await?;
//! ```

use crate::application::config::{Config, CoverageType};
use crate::application::export::ExportPoller;
use crate::application::interfaces::device::DeviceService;
use crate::application::interfaces::event::EventService;
use crate::application::interfaces::export::ExportService;
use crate::application::interfaces::settings::SettingsService;
use crate::constants::{SORA_CAM_BASE_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::device::{Device, OfflineDevice, offline_devices};
use crate::model::event::{
    DeviceEvent, EventsQuery, RecordingsAndEvents, SortOrder, filter_by_label,
};
use crate::model::export::{ExportJob, ExportJobStatus, ImageExportRequest, MediaKind, TimeRange};
use crate::model::http::HttpClient;
use crate::model::settings::{AtomCamSetting, AtomCamSettings, SettingState};
use crate::model::stream::StreamInfo;
use crate::utils::download;
use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the SoraCam API
///
/// The client holds no session state: every request authenticates on its
/// own. It is `Send + Sync`, so concurrent exports can be driven from
/// separate tasks sharing one client.
#[derive(Debug)]
pub struct Client {
    http_client: Arc<HttpClient>,
    download_client: reqwest::Client,
    poller: ExportPoller,
}

impl Client {
    /// Creates a new client
    ///
    /// # Arguments
    /// * `config` - Credentials, endpoint, retry and poll settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use; no request has been made yet
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = Arc::new(HttpClient::new(config.clone())?);
        let download_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.rest_api.timeout())
            .build()?;
        let poller = ExportPoller::new(config.poll.clone());

        Ok(Self {
            http_client,
            download_client,
            poller,
        })
    }

    /// Creates a client for explicit credentials
    ///
    /// # Arguments
    /// * `coverage_type` - `jp` or `g`
    /// * `auth_key_id` - The authentication key ID
    /// * `auth_key` - The authentication key
    pub fn with_credentials(
        coverage_type: &str,
        auth_key_id: &str,
        auth_key: &str,
    ) -> Result<Self, AppError> {
        let coverage_type = coverage_type.parse::<CoverageType>()?;
        Self::new(Config::with_credentials(coverage_type, auth_key_id, auth_key))
    }

    /// Gets the configuration the client was built with
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Gets the underlying request executor
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    fn devices_url(&self) -> String {
        self.http_client.url(SORA_CAM_BASE_PATH)
    }

    /// Percent-encodes a caller supplied identifier as one path segment
    fn path_segment(id: &str) -> Result<String, AppError> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(AppError::InvalidInput(format!(
                "'{id}' is not a valid resource identifier"
            )));
        }
        Ok(urlencoding::encode(id).into_owned())
    }

    fn device_url(&self, device_id: &str, segments: &[&str]) -> Result<String, AppError> {
        let mut path = format!("{}/{}", SORA_CAM_BASE_PATH, Self::path_segment(device_id)?);
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        Ok(self.http_client.url(&path))
    }

    fn export_url(&self, job: &ExportJob) -> Result<String, AppError> {
        let export_id = Self::path_segment(&job.export_id)?;
        self.device_url(&job.device_id, &[job.media.as_str(), "exports", &export_id])
    }

    fn decode_records<T: DeserializeOwned>(records: Vec<Value>) -> Result<Vec<T>, AppError> {
        records
            .into_iter()
            .map(|record| serde_json::from_value(record).map_err(AppError::from))
            .collect()
    }

    /// Polls an export until it completes, then fetches its final result
    async fn wait_for_export(&self, job: ExportJob) -> Result<ExportJobStatus, AppError> {
        let url = self.export_url(&job)?;
        self.poller
            .wait_for_completion(&job, || self.http_client.get::<ExportJobStatus>(&url, &[]))
            .await?;
        self.http_client.get(&url, &[]).await
    }

    async fn request_export<B: serde::Serialize + Sync>(
        &self,
        device_id: &str,
        media: MediaKind,
        payload: &B,
    ) -> Result<ExportJobStatus, AppError> {
        let url = self.device_url(device_id, &[media.as_str(), "exports"])?;
        let accepted: ExportJobStatus = self.http_client.post(&url, payload).await?;
        info!(
            "Requested {} export {} for device {}",
            media, accepted.export_id, device_id
        );
        Ok(accepted)
    }

    fn accepted_export_id(accepted: &ExportJobStatus) -> Result<&str, AppError> {
        if accepted.export_id.is_empty() {
            return Err(AppError::InvalidInput(
                "export request response carries no exportId".to_string(),
            ));
        }
        Ok(&accepted.export_id)
    }
}

#[async_trait]
impl DeviceService for Client {
    async fn get_devices(&self) -> Result<Vec<Device>, AppError> {
        let devices: Vec<Device> = self.http_client.get(&self.devices_url(), &[]).await?;
        debug!("Devices obtained: {} devices", devices.len());
        Ok(devices)
    }

    async fn get_device(&self, device_id: &str) -> Result<Device, AppError> {
        self.http_client
            .get(&self.device_url(device_id, &[])?, &[])
            .await
    }

    async fn get_offline_devices(&self) -> Result<Vec<OfflineDevice>, AppError> {
        let devices = self.get_devices().await?;
        let offline = offline_devices(&devices);
        info!("{} of {} devices are offline", offline.len(), devices.len());
        Ok(offline)
    }
}

#[async_trait]
impl EventService for Client {
    async fn get_devices_events(&self, query: &EventsQuery) -> Result<Vec<DeviceEvent>, AppError> {
        let url = match &query.device_id {
            Some(device_id) => self.device_url(device_id, &["events"])?,
            None => self.http_client.url(&format!("{SORA_CAM_BASE_PATH}/events")),
        };

        let records = self.http_client.fetch_all(&url, &query.params()).await?;
        let events: Vec<DeviceEvent> = Self::decode_records(records)?;
        debug!("Events obtained: {} events", events.len());

        Ok(match &query.label {
            Some(label) => filter_by_label(events, label),
            None => events,
        })
    }

    async fn get_recordings_and_events(
        &self,
        device_id: &str,
        sort: SortOrder,
        from: Option<i64>,
        to: Option<i64>,
    ) -> Result<Vec<RecordingsAndEvents>, AppError> {
        let url = self.device_url(device_id, &["recordings_and_events"])?;
        let mut params = vec![("sort".to_string(), sort.to_string())];
        if let Some(from) = from {
            params.push(("from".to_string(), from.to_string()));
        }
        if let Some(to) = to {
            params.push(("to".to_string(), to.to_string()));
        }

        let records = self.http_client.fetch_all(&url, &params).await?;
        Self::decode_records(records)
    }

    async fn get_stream(
        &self,
        device_id: &str,
        from: i64,
        to: i64,
    ) -> Result<StreamInfo, AppError> {
        let url = self.device_url(device_id, &["stream"])?;
        self.http_client.post(&url, &TimeRange { from, to }).await
    }
}

#[async_trait]
impl ExportService for Client {
    async fn post_images_export_requests(
        &self,
        device_id: &str,
        wide_angle_correction: bool,
        export_time: Option<i64>,
    ) -> Result<ExportJobStatus, AppError> {
        let time = export_time
            .filter(|t| *t != 0)
            .unwrap_or_else(|| Utc::now().timestamp() * 1000);
        let payload = ImageExportRequest::new(time, wide_angle_correction);
        self.request_export(device_id, MediaKind::Image, &payload)
            .await
    }

    async fn get_images_exports(
        &self,
        device_id: &str,
        export_id: &str,
    ) -> Result<ExportJobStatus, AppError> {
        self.wait_for_export(ExportJob::new(device_id, export_id, MediaKind::Image))
            .await
    }

    async fn post_videos_export_requests(
        &self,
        device_id: &str,
        from: i64,
        to: i64,
    ) -> Result<ExportJobStatus, AppError> {
        self.request_export(device_id, MediaKind::Video, &TimeRange { from, to })
            .await
    }

    async fn get_videos_exports(
        &self,
        device_id: &str,
        export_id: &str,
    ) -> Result<ExportJobStatus, AppError> {
        self.wait_for_export(ExportJob::new(device_id, export_id, MediaKind::Video))
            .await
    }

    async fn export_image(
        &self,
        device_id: &str,
        wide_angle_correction: bool,
        export_time: Option<i64>,
    ) -> Result<ExportJobStatus, AppError> {
        let accepted = self
            .post_images_export_requests(device_id, wide_angle_correction, export_time)
            .await?;
        let export_id = Self::accepted_export_id(&accepted)?;
        self.get_images_exports(device_id, export_id).await
    }

    async fn export_video(
        &self,
        device_id: &str,
        from: i64,
        to: i64,
    ) -> Result<ExportJobStatus, AppError> {
        let accepted = self
            .post_videos_export_requests(device_id, from, to)
            .await?;
        let export_id = Self::accepted_export_id(&accepted)?;
        self.get_videos_exports(device_id, export_id).await
    }

    async fn download_file_from_url(
        &self,
        target_url: &str,
        target_directory: &Path,
    ) -> Result<PathBuf, AppError> {
        download::download_file_from_url(&self.download_client, target_url, target_directory).await
    }

    async fn download_export(
        &self,
        export: &ExportJobStatus,
        target_directory: &Path,
    ) -> Result<PathBuf, AppError> {
        let url = export.url.as_deref().ok_or_else(|| {
            AppError::InvalidInput(format!("export {} has no download url", export.export_id))
        })?;
        self.download_file_from_url(url, target_directory).await
    }
}

#[async_trait]
impl SettingsService for Client {
    async fn get_settings(&self, device_id: &str) -> Result<AtomCamSettings, AppError> {
        self.http_client
            .get(&self.device_url(device_id, &["atomcam", "settings"])?, &[])
            .await
    }

    async fn get_setting(
        &self,
        device_id: &str,
        setting: AtomCamSetting,
    ) -> Result<SettingState, AppError> {
        let url = self.device_url(device_id, &["atomcam", "settings", setting.as_str()])?;
        self.http_client.get(&url, &[]).await
    }

    async fn set_setting(
        &self,
        device_id: &str,
        setting: AtomCamSetting,
        value: &SettingState,
    ) -> Result<(), AppError> {
        let url = self.device_url(device_id, &["atomcam", "settings", setting.as_str()])?;
        let _: Value = self.http_client.post(&url, value).await?;
        info!("Setting {} of device {} updated", setting, device_id);
        Ok(())
    }
}
