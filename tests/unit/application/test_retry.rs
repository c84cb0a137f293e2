use crate::common::*;
use mockito::Server;
use reqwest::StatusCode;
use soracam_client::prelude::*;
use std::time::Duration;

#[tokio::test]
async fn test_rate_limited_request_is_retried() {
    let mut server = Server::new_async().await;
    let auth_mock = mock_auth(&mut server, 3).await;
    let limited = server
        .mock("GET", "/v1/sora_cam/devices")
        .with_status(429)
        .with_body("Too Many Requests")
        .expect(2)
        .create_async()
        .await;
    let ok = server
        .mock("GET", "/v1/sora_cam/devices")
        .with_status(200)
        .with_body(r#"[{"deviceId":"7C12345678AB"}]"#)
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server);
    let devices = client.get_devices().await.unwrap();

    assert_eq!(devices.len(), 1);
    auth_mock.assert_async().await;
    limited.assert_async().await;
    ok.assert_async().await;
}

#[tokio::test]
async fn test_rate_limit_outliving_budget_returns_429() {
    let mut server = Server::new_async().await;
    let auth_mock = mock_auth(&mut server, 3).await;
    let limited = server
        .mock("GET", "/v1/sora_cam/devices")
        .with_status(429)
        .with_body("Too Many Requests")
        .expect(3)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.get_devices().await.unwrap_err();

    match err {
        AppError::Http { status, body } => {
            assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
            assert_eq!(body, "Too Many Requests");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
    auth_mock.assert_async().await;
    limited.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mut server = Server::new_async().await;
    let auth_mock = mock_auth(&mut server, 1).await;
    let failing = server
        .mock("GET", "/v1/sora_cam/devices")
        .with_status(500)
        .with_body("boom")
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.get_devices().await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    auth_mock.assert_async().await;
    failing.assert_async().await;
}

#[tokio::test]
async fn test_not_found_is_http_error() {
    let mut server = Server::new_async().await;
    mock_auth(&mut server, 1).await;
    server
        .mock("GET", device_path("").as_str())
        .with_status(404)
        .with_body(r#"{"code":"SCM0001","message":"not found"}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.get_device(DEVICE_ID).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_slow_response_is_timeout() {
    let mut server = Server::new_async().await;
    mock_auth(&mut server, 1).await;
    server
        .mock("GET", "/v1/sora_cam/devices")
        .with_status(200)
        .with_body_from_request(|_| {
            std::thread::sleep(Duration::from_millis(500));
            b"[]".to_vec()
        })
        .create_async()
        .await;

    let mut config = test_config(&server);
    config.rest_api.timeout_ms = 100;
    let client = Client::new(config).unwrap();

    let err = client.get_devices().await.unwrap_err();
    assert!(matches!(err, AppError::Timeout(_)), "got {err:?}");
}
