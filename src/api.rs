//! Remote data fetch over HTTP.
//!
//! The one demonstration that performs real I/O. Issues a GET, rejects
//! non-success statuses, and decodes the body as JSON. Every failure is
//! reported through the [`Reporter`] and re-raised unchanged to the
//! caller; nothing is swallowed or retried here.

use serde_json::Value;
use thiserror::Error;

use crate::constants::FETCH_TIMEOUT;
use crate::report::Reporter;

/// Errors from the remote fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Build the HTTP client used by the fetch demonstration.
pub fn client() -> Result<reqwest::Client, FetchError> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    Ok(client)
}

/// GET `url` and decode the response body as JSON.
///
/// A non-success status fails with [`FetchError::Status`]; transport
/// and decode failures surface as [`FetchError::Http`]. All three are
/// logged before propagating.
pub async fn fetch_json(
    client: &reqwest::Client,
    url: &str,
    report: &Reporter,
) -> Result<Value, FetchError> {
    let result = request(client, url).await;
    if let Err(err) = &result {
        report.error(&format!("failed to fetch {url}: {err}"));
    }
    result
}

async fn request(client: &reqwest::Client, url: &str) -> Result<Value, FetchError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    Ok(response.json().await?)
}
