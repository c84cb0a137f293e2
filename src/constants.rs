/// Default timeout in seconds applied to every HTTP call
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
/// Default number of attempts for a request answered with HTTP 429
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default pause in seconds between two rate limited attempts
pub const DEFAULT_RETRY_INTERVAL_SECS: u64 = 3;
/// Initial wait in seconds between two export status polls
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
/// Amount in seconds added to the poll wait after every pending status
pub const DEFAULT_POLL_STEP_SECS: u64 = 10;
/// Upper bound in seconds for the poll wait
pub const DEFAULT_POLL_INTERVAL_MAX_SECS: u64 = 60;
/// Overall time in seconds an export is polled before giving up
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 900;
/// Maximum number of pages followed by a paginated request
pub const DEFAULT_MAX_PAGES: u32 = 1000;
/// Default coverage type used to pick the API host
pub const DEFAULT_COVERAGE_TYPE: &str = "jp";
/// Base path of every SoraCam device resource
pub const SORA_CAM_BASE_PATH: &str = "v1/sora_cam/devices";
/// Path of the authentication endpoint
pub const AUTH_PATH: &str = "v1/auth";
/// Response header carrying the continuation token of a paginated listing
pub const NEXT_KEY_HEADER: &str = "x-soracom-next-key";
/// Query parameter used to request the page after a continuation token
pub const LAST_EVALUATED_KEY_PARAM: &str = "last_evaluated_key";
/// Export status reported once the artifact is ready
pub const EXPORT_STATUS_COMPLETED: &str = "completed";
/// Export status reported when the service gave up on the job
pub const EXPORT_STATUS_FAILED: &str = "failed";
/// Image filter requested when wide angle correction is enabled
pub const WIDE_ANGLE_CORRECTION_FILTER: &str = "wide_angle_correction";
/// Buffer size used when streaming a download to disk
pub const DOWNLOAD_CHUNK_SIZE: usize = 8192;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "soracam-client/0.1.0";
