//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the single shared HTTP client with the configured User-Agent
//! - GET requests returning the page body as text
//! - Mapping transport failures and non-success statuses to `ScrapeError`
//!
//! There is no retry and no timeout: a request that hangs only blocks the
//! page that issued it.

use crate::config::HttpConfig;
use crate::ScrapeError;
use reqwest::Client;

/// Builds the HTTP client shared by every request of a run
///
/// # Example
///
/// ```no_run
/// use moviemeter::config::HttpConfig;
/// use moviemeter::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body
///
/// Redirects are followed by the client. Any status outside 2xx is reported
/// as `ScrapeError::Status`; connection and body read failures as
/// `ScrapeError::Http`.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })?;

    tracing::trace!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
