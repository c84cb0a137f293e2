//! Continuation-token pagination
//!
//! Listings return at most one page per call. When more data is available
//! the service adds an `x-soracom-next-key` header whose value is sent back
//! as `last_evaluated_key` to obtain the next page.

use crate::constants::NEXT_KEY_HEADER;
use crate::error::AppError;
use reqwest::Response;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, warn};

/// One page of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Records of the page, in server order
    pub records: Vec<Value>,
    /// Continuation token, `None` on the last page
    pub next_key: Option<String>,
}

impl Page {
    /// Builds a page from a decoded body
    ///
    /// An array is flattened into its elements; any other value is kept as a
    /// single record. An empty continuation token counts as absent.
    #[must_use]
    pub fn new(body: Value, next_key: Option<String>) -> Self {
        let records = match body {
            Value::Array(items) => items,
            other => vec![other],
        };
        Self {
            records,
            next_key: next_key.filter(|key| !key.is_empty()),
        }
    }

    /// Reads the continuation header and JSON body of a listing response
    pub async fn from_response(response: Response) -> Result<Self, AppError> {
        let next_key = response
            .headers()
            .get(NEXT_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)?;
        Ok(Self::new(body, next_key))
    }
}

/// Fetches pages until one comes without a continuation token
///
/// `fetch` receives the token of the previous page (`None` for the first
/// call). Records are concatenated in the order they are received. A server
/// that still hands out a token after `max_pages` pages yields
/// [`AppError::PaginationLimit`].
pub async fn collect_pages<F, Fut>(max_pages: u32, mut fetch: F) -> Result<Vec<Value>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page, AppError>>,
{
    let max_pages = max_pages.max(1);
    let mut records = Vec::new();
    let mut next_key = None;
    let mut pages = 0;

    loop {
        let page = fetch(next_key.take()).await?;
        pages += 1;
        debug!(
            "Page {} returned {} records, next key: {:?}",
            pages,
            page.records.len(),
            page.next_key
        );
        records.extend(page.records);

        match page.next_key {
            None => return Ok(records),
            Some(_) if pages >= max_pages => {
                warn!(
                    "Continuation token still present after {} pages, giving up",
                    pages
                );
                return Err(AppError::PaginationLimit(max_pages));
            }
            Some(key) => next_key = Some(key),
        }
    }
}
