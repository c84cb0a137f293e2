/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/

//! Export job polling
//!
//! Image and video exports run asynchronously on the service. After the
//! export request is accepted, the job's status resource is polled until it
//! reports `completed` or `failed`, or until the poll ceiling is reached.
//! Waits between polls grow linearly up to a cap.

use crate::application::config::PollConfig;
use crate::error::AppError;
use crate::model::export::{ExportJob, ExportJobStatus, ExportState};
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error, info};

/// Time source used by the poller
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current monotonic instant
    ///
    /// Uses tokio's clock, so a paused runtime also pauses polling.
    fn now(&self) -> Instant;

    /// Suspends the caller for `duration`
    async fn sleep(&self, duration: Duration);
}

/// [`Clock`] backed by `tokio::time`, honouring `tokio::time::pause`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Linearly growing wait between two polls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSchedule {
    current: Duration,
    step: Duration,
    max: Duration,
}

impl PollSchedule {
    /// Creates the schedule described by `config`
    #[must_use]
    pub fn new(config: &PollConfig) -> Self {
        Self {
            current: config.initial_interval(),
            step: config.step(),
            max: config.max_interval(),
        }
    }

    /// Wait to apply after the current pending status
    #[must_use]
    pub fn current(&self) -> Duration {
        self.current
    }

    /// Grows the wait by one step, saturating at the cap
    pub fn advance(&mut self) {
        self.current = self.current.saturating_add(self.step).min(self.max);
    }
}

impl Iterator for PollSchedule {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let wait = self.current;
        self.advance();
        Some(wait)
    }
}

/// Drives one export job to a terminal state
#[derive(Debug, Clone)]
pub struct ExportPoller<C: Clock = TokioClock> {
    config: PollConfig,
    clock: C,
}

impl ExportPoller<TokioClock> {
    /// Creates a poller using the system clock
    #[must_use]
    pub fn new(config: PollConfig) -> Self {
        Self::with_clock(config, TokioClock)
    }
}

impl<C: Clock> ExportPoller<C> {
    /// Creates a poller using a custom clock
    pub fn with_clock(config: PollConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Gets the poll schedule configuration
    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// Polls `fetch_status` until the job completes, fails or times out
    ///
    /// # Returns
    /// * `Ok(ExportJobStatus)` - The status that reported completion
    /// * `Err(AppError::ExportFailed)` - The service reported `failed`; no
    ///   further status call is made
    /// * `Err(AppError::ExportTimeout)` - The poll ceiling was reached
    /// * Any error returned by `fetch_status`
    pub async fn wait_for_completion<F, Fut>(
        &self,
        job: &ExportJob,
        mut fetch_status: F,
    ) -> Result<ExportJobStatus, AppError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<ExportJobStatus, AppError>>,
    {
        let start = self.clock.now();
        let timeout = self.config.timeout();
        let mut schedule = PollSchedule::new(&self.config);
        let mut polls = 0u32;

        while self.clock.now().saturating_duration_since(start) < timeout {
            let status = fetch_status().await?;
            polls += 1;
            debug!(
                "export status for device {}, export {}: {:?} (poll {})",
                job.device_id, job.export_id, status.status, polls
            );

            match status.state() {
                ExportState::Completed => {
                    info!(
                        "Export {} for device {} completed after {} polls",
                        job.export_id, job.device_id, polls
                    );
                    return Ok(status);
                }
                ExportState::Failed => {
                    error!(
                        "Export {} for device {} failed",
                        job.export_id, job.device_id
                    );
                    return Err(AppError::ExportFailed {
                        device_id: job.device_id.clone(),
                        export_id: job.export_id.clone(),
                    });
                }
                ExportState::Pending => {
                    let elapsed = self.clock.now().saturating_duration_since(start);
                    let remaining = timeout.saturating_sub(elapsed);
                    if remaining.is_zero() {
                        break;
                    }
                    let wait = schedule.current().min(remaining);
                    self.clock.sleep(wait).await;
                    schedule.advance();
                }
            }
        }

        let elapsed = self.clock.now().saturating_duration_since(start);
        error!(
            "Checking export status timed out for device {}, export {} after {:?}",
            job.device_id, job.export_id, elapsed
        );
        Err(AppError::ExportTimeout {
            device_id: job.device_id.clone(),
            export_id: job.export_id.clone(),
            elapsed,
        })
    }
}
