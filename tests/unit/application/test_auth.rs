use crate::common::*;
use mockito::Server;
use soracam_client::prelude::*;
use std::sync::Arc;

#[tokio::test]
async fn test_obtain_headers() {
    let mut server = Server::new_async().await;
    let auth_mock = mock_auth(&mut server, 1).await;

    let config = Arc::new(test_config(&server));
    let http = HttpClient::new(config).unwrap();
    let headers = http.auth().obtain_headers().await.unwrap();

    assert_eq!(headers.api_key, API_KEY);
    assert_eq!(headers.token, TOKEN);
    auth_mock.assert_async().await;
}

#[tokio::test]
async fn test_every_call_authenticates_and_sends_headers() {
    let mut server = Server::new_async().await;
    let auth_mock = mock_auth(&mut server, 3).await;
    let devices_mock = server
        .mock("GET", "/v1/sora_cam/devices")
        .match_header("x-soracom-api-key", API_KEY)
        .match_header("x-soracom-token", TOKEN)
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body("[]")
        .expect(3)
        .create_async()
        .await;

    let client = test_client(&server);
    for _ in 0..3 {
        assert!(client.get_devices().await.unwrap().is_empty());
    }

    auth_mock.assert_async().await;
    devices_mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_credentials_fail_without_api_call() {
    let mut server = Server::new_async().await;
    let auth_mock = server
        .mock("POST", "/v1/auth")
        .with_status(401)
        .with_body(r#"{"code":"AUTH0001","message":"invalid credentials"}"#)
        .expect(1)
        .create_async()
        .await;
    let devices_mock = server
        .mock("GET", "/v1/sora_cam/devices")
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.get_devices().await.unwrap_err();

    match err {
        AppError::Auth(message) => assert!(message.contains("401")),
        other => panic!("expected Auth error, got {other:?}"),
    }
    auth_mock.assert_async().await;
    devices_mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_auth_response_is_auth_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/auth")
        .with_status(200)
        .with_body(r#"{"unexpected":true}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.get_device(DEVICE_ID).await.unwrap_err();
    assert!(matches!(err, AppError::Auth(_)));
}
