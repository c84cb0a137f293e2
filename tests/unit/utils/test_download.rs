use mockito::Server;
use soracam_client::error::AppError;
use soracam_client::utils::download::{download_file_from_url, filename_from_url};

#[test]
fn test_filename_from_presigned_url() {
    let name = filename_from_url(
        "https://soracam-exports.s3.ap-northeast-1.amazonaws.com/OP001/7C12345678AB/clip%2001.mp4?X-Amz-Expires=3600",
    )
    .unwrap();
    assert_eq!(name, "clip 01.mp4");
}

#[tokio::test]
async fn test_download_streams_body_to_file() {
    let mut server = Server::new_async().await;
    let body: Vec<u8> = (0..50_000u32).map(|i| (i % 251) as u8).collect();
    server
        .mock("GET", "/files/snapshot.jpg")
        .with_status(200)
        .with_body(body.clone())
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();
    let url = format!("{}/files/snapshot.jpg", server.url());

    let path = download_file_from_url(&client, &url, dir.path()).await.unwrap();

    assert_eq!(path.file_name().unwrap(), "snapshot.jpg");
    assert_eq!(std::fs::read(&path).unwrap(), body);
}

#[tokio::test]
async fn test_download_overwrites_existing_file() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/files/report.txt")
        .with_status(200)
        .with_body("new")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("report.txt"), "old content").unwrap();

    let client = reqwest::Client::new();
    let url = format!("{}/files/report.txt", server.url());
    let path = download_file_from_url(&client, &url, dir.path()).await.unwrap();

    assert_eq!(std::fs::read_to_string(path).unwrap(), "new");
}

#[tokio::test]
async fn test_download_error_status_leaves_no_file() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/files/expired.jpg")
        .with_status(403)
        .with_body("AccessDenied")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();
    let url = format!("{}/files/expired.jpg", server.url());

    let err = download_file_from_url(&client, &url, dir.path())
        .await
        .unwrap_err();

    match err {
        AppError::Http { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(body, "AccessDenied");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
    assert!(!dir.path().join("expired.jpg").exists());
}

#[tokio::test]
async fn test_download_into_missing_directory_is_io_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/files/a.jpg")
        .with_status(200)
        .with_body("data")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let client = reqwest::Client::new();
    let url = format!("{}/files/a.jpg", server.url());

    let err = download_file_from_url(&client, &url, &missing)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn test_download_from_blocking_context() {
    let mut server = Server::new();
    server
        .mock("GET", "/files/note.txt")
        .with_status(200)
        .with_body("hello")
        .create();

    let dir = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();
    let url = format!("{}/files/note.txt", server.url());

    let path = tokio_test::block_on(download_file_from_url(&client, &url, dir.path())).unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
}
