use crate::common;
use chrono::Utc;
use soracam_client::prelude::*;
use tracing::info;

#[tokio::test]
#[ignore]
async fn test_get_devices() {
    let client = common::create_test_client();
    let devices = client.get_devices().await.expect("Failed to get devices");

    for device in &devices {
        assert!(!device.device_id.is_empty());
    }
    info!("Found {} devices", devices.len());
}

#[tokio::test]
#[ignore]
async fn test_get_offline_devices() {
    let client = common::create_test_client();
    let offline = client
        .get_offline_devices()
        .await
        .expect("Failed to get offline devices");

    info!("{} devices offline", offline.len());
}

#[tokio::test]
#[ignore]
async fn test_get_device_events_last_day() {
    let client = common::create_test_client();
    let now = Utc::now().timestamp_millis();
    let query = EventsQuery {
        from: Some(now - 24 * 60 * 60 * 1000),
        to: Some(now),
        limit: 100,
        ..EventsQuery::for_device(common::test_device_id())
    };

    let events = client
        .get_devices_events(&query)
        .await
        .expect("Failed to get events");
    assert!(events.iter().all(|e| e.event_time <= now));
    info!("Found {} events", events.len());
}

#[tokio::test]
#[ignore]
async fn test_get_settings() {
    let client = common::create_test_client();
    let settings = client
        .get_settings(&common::test_device_id())
        .await
        .expect("Failed to get settings");
    info!("Settings: {}", settings);
}
