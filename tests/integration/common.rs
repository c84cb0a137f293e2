// Common utilities for integration tests

use soracam_client::prelude::*;
use soracam_client::utils::config::get_env_or_none;

/// Creates a client from the environment and `.env`
pub fn create_test_client() -> Client {
    setup_logger();
    Client::new(Config::new()).expect("Failed to create client")
}

/// Device used by live tests
pub fn test_device_id() -> String {
    get_env_or_none::<String>("SORACAM_TEST_DEVICE_ID")
        .expect("SORACAM_TEST_DEVICE_ID must be set for live tests")
}
