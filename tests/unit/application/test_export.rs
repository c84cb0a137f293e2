use crate::common::*;
use mockito::{Matcher, Server};
use serde_json::json;
use soracam_client::prelude::*;

#[tokio::test]
async fn test_export_image_polls_until_completed() {
    let mut server = Server::new_async().await;
    // one request, two pending polls, one completed poll, one final read
    let auth_mock = mock_auth(&mut server, 5).await;
    let request = server
        .mock("POST", device_path("images/exports").as_str())
        .match_body(Matcher::Json(json!({
            "time": 1700000000000i64,
            "imageFilters": ["wide_angle_correction"]
        })))
        .with_status(200)
        .with_body(json!({"exportId": "exp-1", "status": "initializing"}).to_string())
        .expect(1)
        .create_async()
        .await;
    let pending = server
        .mock("GET", device_path("images/exports/exp-1").as_str())
        .with_status(200)
        .with_body(json!({"exportId": "exp-1", "status": "processing"}).to_string())
        .expect(2)
        .create_async()
        .await;
    let completed = server
        .mock("GET", device_path("images/exports/exp-1").as_str())
        .with_status(200)
        .with_body(
            json!({
                "exportId": "exp-1",
                "status": "completed",
                "url": "https://example.com/exports/exp-1.jpg"
            })
            .to_string(),
        )
        .expect(2)
        .create_async()
        .await;

    let client = test_client(&server);
    let result = client
        .export_image(DEVICE_ID, true, Some(1_700_000_000_000))
        .await
        .unwrap();

    assert_eq!(result.state(), ExportState::Completed);
    assert_eq!(
        result.url.as_deref(),
        Some("https://example.com/exports/exp-1.jpg")
    );
    auth_mock.assert_async().await;
    request.assert_async().await;
    pending.assert_async().await;
    completed.assert_async().await;
}

#[tokio::test]
async fn test_image_export_request_without_time_uses_now() {
    let mut server = Server::new_async().await;
    mock_auth(&mut server, 1).await;
    let request = server
        .mock("POST", device_path("images/exports").as_str())
        .match_body(Matcher::Regex(r#""time":\d{13}"#.to_string()))
        .with_status(200)
        .with_body(json!({"exportId": "exp-2", "status": "initializing"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server);
    let accepted = client
        .post_images_export_requests(DEVICE_ID, false, None)
        .await
        .unwrap();

    assert_eq!(accepted.export_id, "exp-2");
    request.assert_async().await;
}

#[tokio::test]
async fn test_export_video_failed_stops_polling() {
    let mut server = Server::new_async().await;
    mock_auth(&mut server, 3).await;
    server
        .mock("POST", device_path("videos/exports").as_str())
        .match_body(Matcher::Json(json!({"from": 1000, "to": 61000})))
        .with_status(200)
        .with_body(json!({"exportId": "vid-1", "status": "initializing"}).to_string())
        .create_async()
        .await;
    server
        .mock("GET", device_path("videos/exports/vid-1").as_str())
        .with_status(200)
        .with_body(json!({"exportId": "vid-1", "status": "processing"}).to_string())
        .expect(1)
        .create_async()
        .await;
    let failed = server
        .mock("GET", device_path("videos/exports/vid-1").as_str())
        .with_status(200)
        .with_body(json!({"exportId": "vid-1", "status": "failed"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.export_video(DEVICE_ID, 1000, 61000).await.unwrap_err();

    match err {
        AppError::ExportFailed {
            device_id,
            export_id,
        } => {
            assert_eq!(device_id, DEVICE_ID);
            assert_eq!(export_id, "vid-1");
        }
        other => panic!("expected ExportFailed, got {other:?}"),
    }
    failed.assert_async().await;
}

#[tokio::test]
async fn test_export_times_out() {
    let mut server = Server::new_async().await;
    mock_auth(&mut server, 100).await;
    server
        .mock("GET", device_path("images/exports/exp-3").as_str())
        .with_status(200)
        .with_body(json!({"exportId": "exp-3", "status": "processing"}).to_string())
        .expect_at_least(1)
        .create_async()
        .await;

    let mut config = test_config(&server);
    config.poll = PollConfig::new(
        std::time::Duration::from_millis(20),
        std::time::Duration::from_millis(20),
        std::time::Duration::from_millis(40),
        std::time::Duration::from_millis(150),
    );
    let client = Client::new(config).unwrap();

    let err = client
        .get_images_exports(DEVICE_ID, "exp-3")
        .await
        .unwrap_err();
    match err {
        AppError::ExportTimeout {
            export_id, elapsed, ..
        } => {
            assert_eq!(export_id, "exp-3");
            assert!(elapsed >= std::time::Duration::from_millis(150));
        }
        other => panic!("expected ExportTimeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_export_without_id_is_invalid() {
    let mut server = Server::new_async().await;
    mock_auth(&mut server, 1).await;
    server
        .mock("POST", device_path("images/exports").as_str())
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.export_image(DEVICE_ID, false, None).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_download_export() {
    let mut server = Server::new_async().await;
    let file = server
        .mock("GET", "/exports/exp-1.jpg")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(vec![0xFFu8, 0xD8, 0xFF, 0xE0, 1, 2, 3])
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server);
    let export = ExportJobStatus {
        export_id: "exp-1".to_string(),
        status: "completed".to_string(),
        url: Some(format!("{}/exports/exp-1.jpg?X-Amz-Signature=abc", server.url())),
        ..Default::default()
    };
    let dir = tempfile::tempdir().unwrap();
    let path = client.download_export(&export, dir.path()).await.unwrap();

    assert_eq!(path, dir.path().join("exp-1.jpg"));
    assert_eq!(
        std::fs::read(&path).unwrap(),
        vec![0xFFu8, 0xD8, 0xFF, 0xE0, 1, 2, 3]
    );
    file.assert_async().await;
}

#[tokio::test]
async fn test_download_export_without_url() {
    let server = Server::new_async().await;
    let client = test_client(&server);
    let export = ExportJobStatus {
        export_id: "exp-1".to_string(),
        status: "processing".to_string(),
        ..Default::default()
    };
    let dir = tempfile::tempdir().unwrap();

    let err = client.download_export(&export, dir.path()).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_export_id_is_encoded() {
    let mut server = Server::new_async().await;
    mock_auth(&mut server, 2).await;
    let status = server
        .mock("GET", device_path("videos/exports/a%2Fb").as_str())
        .with_status(200)
        .with_body(json!({"exportId": "a/b", "status": "completed", "url": "https://example.com/a.mp4"}).to_string())
        .expect(2)
        .create_async()
        .await;

    let client = test_client(&server);
    let result = client.get_videos_exports(DEVICE_ID, "a/b").await.unwrap();

    assert_eq!(result.export_id, "a/b");
    status.assert_async().await;
}
