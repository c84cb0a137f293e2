// Live tests against the Soracom API.
// They need SORACOM_AUTH_KEY_ID, SORACOM_AUTH_KEY and SORACAM_TEST_DEVICE_ID
// and are ignored by default: `cargo test -- --ignored`.
mod common;
mod device_tests;
