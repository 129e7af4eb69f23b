//! HTTP fetcher implementation
//!
//! Performs single GET requests with a fixed user agent and a per-request
//! timeout. Failures never escape this module as errors; they are returned
//! as data so the crawl can continue with sibling branches.

use reqwest::Client;
use std::time::Duration;

/// Fixed user agent sent with every request
pub const USER_AGENT: &str = "Magic Browser";

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Raw response body as text
        body: String,
    },

    /// Network error, timeout, error status, or unusable body
    Failure {
        /// Error description
        reason: String,
    },
}

/// Builds the HTTP client used for one crawl invocation
///
/// The client carries the fixed user agent and the configured per-request
/// timeout. Connections are pooled for the lifetime of the crawl and
/// released when the crawler is dropped.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET request
///
/// # Outcome Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with non-empty body | `Success` |
/// | 4xx / 5xx status | `Failure` |
/// | Timeout, DNS failure, connection refused | `Failure` |
/// | Body read error | `Failure` |
/// | Empty body | `Failure` |
///
/// Each failure emits one log line identifying the URL and the error; the
/// caller only ever sees the returned value.
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
    {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {}", url, e);
            return FetchResult::Failure {
                reason: e.to_string(),
            };
        }
    };

    match response.text().await {
        Ok(body) if body.is_empty() => {
            tracing::warn!("Empty response body from {}", url);
            FetchResult::Failure {
                reason: "empty response body".to_string(),
            }
        }
        Ok(body) => FetchResult::Success { body },
        Err(e) => {
            tracing::warn!("Failed to read body from {}: {}", url, e);
            FetchResult::Failure {
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(Duration::from_secs(5));
        assert!(client.is_ok());
    }

    // Network behavior (timeouts, error statuses, empty bodies) is covered
    // by the wiremock integration tests.
}
