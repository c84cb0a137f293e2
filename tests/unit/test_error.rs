use reqwest::StatusCode;
use soracam_client::error::AppError;
use std::time::Duration;

#[test]
fn test_app_error_display_http() {
    let error = AppError::Http {
        status: StatusCode::TOO_MANY_REQUESTS,
        body: "slow down".to_string(),
    };
    assert_eq!(error.to_string(), "http error 429 Too Many Requests: slow down");
    assert_eq!(error.status(), Some(StatusCode::TOO_MANY_REQUESTS));
}

#[test]
fn test_app_error_display_auth() {
    let error = AppError::Auth("status 401".to_string());
    assert_eq!(error.to_string(), "authentication failed: status 401");
    assert_eq!(error.status(), None);
}

#[test]
fn test_app_error_display_export_failed() {
    let error = AppError::ExportFailed {
        device_id: "7C12345678AB".to_string(),
        export_id: "exp-1".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "export failed for device 7C12345678AB, export exp-1"
    );
}

#[test]
fn test_app_error_display_export_timeout() {
    let error = AppError::ExportTimeout {
        device_id: "7C12345678AB".to_string(),
        export_id: "exp-1".to_string(),
        elapsed: Duration::from_secs(900),
    };
    let message = error.to_string();
    assert!(message.contains("timed out"));
    assert!(message.contains("exp-1"));
    assert!(message.contains("900s"));
}

#[test]
fn test_app_error_display_pagination_limit() {
    let error = AppError::PaginationLimit(1000);
    assert_eq!(error.to_string(), "pagination limit of 1000 pages reached");
}

#[test]
fn test_app_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error:"));
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::Io(_)));
    assert_eq!(error.to_string(), "io error: denied");
}
