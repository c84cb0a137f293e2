/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/
/// Authentication request, response and headers
pub mod auth;
/// Device records
pub mod device;
/// Event and recording records
pub mod event;
/// Export job records
pub mod export;
/// HTTP request executor with rate limiting and retry
pub mod http;
/// Retry configuration for HTTP requests
pub mod retry;
/// ATOM camera settings records
pub mod settings;
/// Archived stream records
pub mod stream;
