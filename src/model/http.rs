/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::pagination::{Page, collect_pages};
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{LAST_EVALUATED_KEY_PARAM, USER_AGENT};
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Query string parameters of a request
pub type Params = [(String, String)];

/// Request executor for the Soracom API
///
/// Every call obtains fresh auth headers, waits on the client side rate
/// limiter and retries HTTP 429 responses according to the configured
/// [`RetryConfig`]. All calls share one connection pool and the configured
/// per call timeout.
#[derive(Debug)]
pub struct HttpClient {
    auth: Auth,
    http_client: Client,
    config: Arc<Config>,
    rate_limiter: RateLimiter,
}

impl HttpClient {
    /// Creates a new executor
    ///
    /// No network call is made until the first request.
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.rest_api.timeout())
            .build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);
        let auth = Auth::new(config.clone(), http_client.clone());

        Ok(Self {
            auth,
            http_client,
            config,
            rate_limiter,
        })
    }

    /// Builds an absolute URL from a path relative to the API endpoint
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.config.rest_api.base_url,
            path.trim_start_matches('/')
        )
    }

    /// Gets the configuration the executor was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the credential provider
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Makes a GET request and decodes the JSON body
    pub async fn get<T: DeserializeOwned>(&self, url: &str, params: &Params) -> Result<T, AppError> {
        let response = self.get_raw(url, params).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Makes a GET request and returns the whole response
    ///
    /// Used when response headers matter, e.g. the continuation token of a
    /// paginated listing.
    pub async fn get_raw(&self, url: &str, params: &Params) -> Result<Response, AppError> {
        make_http_request(
            &self.http_client,
            &self.auth,
            &self.rate_limiter,
            Method::GET,
            url,
            params,
            None::<&()>,
            &self.config.retry,
        )
        .await
    }

    /// Makes a POST request with a JSON body
    ///
    /// A response body that is not valid JSON is read as an empty object.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, AppError> {
        if let Ok(payload) = serde_json::to_string(body) {
            debug!("payload: {}", payload);
        }

        let response = make_http_request(
            &self.http_client,
            &self.auth,
            &self.rate_limiter,
            Method::POST,
            url,
            &[],
            Some(body),
            &self.config.retry,
        )
        .await?;

        let text = response.text().await?;
        let value = serde_json::from_str::<Value>(&text).unwrap_or_else(|_| {
            debug!("POST {} returned a non JSON body, using an empty object", url);
            Value::Object(Default::default())
        });
        Ok(serde_json::from_value(value)?)
    }

    /// Follows the continuation token of a listing and returns every record
    ///
    /// A page holding a JSON array contributes its elements, any other page
    /// contributes itself as one record.
    pub async fn fetch_all(&self, url: &str, params: &Params) -> Result<Vec<Value>, AppError> {
        collect_pages(self.config.pagination.max_pages, move |next_key| async move {
            let mut page_params = params.to_vec();
            if let Some(key) = next_key {
                page_params.push((LAST_EVALUATED_KEY_PARAM.to_string(), key));
            }
            let response = self.get_raw(url, &page_params).await?;
            Page::from_response(response).await
        })
        .await
    }

    /// Gets the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.http_client
    }
}

/// Makes an HTTP request with fresh auth headers, rate limiting and 429 retries
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `auth` - Credential provider called once per attempt
/// * `rate_limiter` - Shared rate limiter awaited before every attempt
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `params` - Query string parameters
/// * `body` - Optional request body (serialized to JSON)
/// * `retry_config` - Attempt budget and pause for rate limited responses
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError::Http)` - Any other non-2xx status, or 429 on the last attempt
/// * `Err(AppError::Timeout)` - The call exceeded the client timeout
#[allow(clippy::too_many_arguments)]
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    auth: &Auth,
    rate_limiter: &RateLimiter,
    method: Method,
    url: &str,
    params: &Params,
    body: Option<&B>,
    retry_config: &RetryConfig,
) -> Result<Response, AppError> {
    let max_attempts = retry_config.max_attempts();
    let mut attempt = 0;

    loop {
        attempt += 1;
        rate_limiter.wait().await;
        let headers = auth.obtain_headers().await?;

        debug!("{} {} (attempt {}/{})", method, url, attempt, max_attempts);

        let mut request = client.request(method.clone(), url);
        for (name, value) in headers.as_pairs() {
            request = request.header(name, value);
        }
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body_text = response.text().await.unwrap_or_default();

        if status == StatusCode::TOO_MANY_REQUESTS {
            if attempt >= max_attempts {
                error!(
                    "{} request for {} still rate limited after {} attempts: {}",
                    method, url, attempt, body_text
                );
                return Err(AppError::Http {
                    status,
                    body: body_text,
                });
            }

            warn!(
                "Rate limited (attempt {}/{}). Waiting {:?} before retry...",
                attempt,
                max_attempts,
                retry_config.interval()
            );
            tokio::time::sleep(retry_config.interval()).await;
            continue;
        }

        error!("{} request for {} failed with status {}: {}", method, url, status, body_text);
        return Err(AppError::Http {
            status,
            body: body_text,
        });
    }
}
