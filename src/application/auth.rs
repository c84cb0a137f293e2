/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the Soracom API
//!
//! Every API call is preceded by one `/v1/auth` exchange that turns the
//! long-lived auth key pair into a short-lived API key and token. The result
//! is handed to the caller and never stored, so a token is used for exactly
//! one request.

use crate::application::config::Config;
use crate::constants::AUTH_PATH;
use crate::error::AppError;
use crate::model::auth::{AuthHeaders, AuthRequest, AuthResponse};
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, error};

/// Credential provider exchanging the auth key pair for request headers
#[derive(Debug, Clone)]
pub struct Auth {
    config: Arc<Config>,
    client: Client,
}

impl Auth {
    /// Creates a provider sharing the connection pool of `client`
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// URL of the authentication endpoint
    #[must_use]
    pub fn auth_url(&self) -> String {
        format!("{}/{}", self.config.rest_api.base_url, AUTH_PATH)
    }

    /// Performs one authentication call and returns fresh headers
    ///
    /// # Returns
    /// * `Ok(AuthHeaders)` - Headers valid for the next request
    /// * `Err(AppError::Auth)` - On transport failure, timeout, non-2xx
    ///   status or an unreadable response body
    pub async fn obtain_headers(&self) -> Result<AuthHeaders, AppError> {
        let url = self.auth_url();
        let payload = AuthRequest {
            auth_key_id: &self.config.credentials.auth_key_id,
            auth_key: &self.config.credentials.auth_key,
        };

        debug!("Authenticating against {}", url);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("failed to authenticate: {e}");
                AppError::Auth(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("failed to read authentication response: {e}");
            AppError::Auth(e.to_string())
        })?;

        if !status.is_success() {
            error!("Authentication failed with status {}: {}", status, body);
            return Err(AppError::Auth(format!("status {status}: {body}")));
        }

        let auth: AuthResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Unexpected authentication response: {e}");
            AppError::Auth(format!("invalid authentication response: {e}"))
        })?;

        Ok(auth.into())
    }
}
