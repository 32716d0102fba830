//! HTTP client construction for provider requests.
//!
//! Provides a configured [`reqwest::Client`] with the retriever's request
//! timeout. One client is built per retriever instance and reused across
//! calls.

use crate::config::FirecrawlConfig;
use crate::error::SearchError;
use std::time::Duration;

/// Build a [`reqwest::Client`] configured for Firecrawl API requests.
///
/// The timeout bounds the whole request; there is no retry, so it is also
/// the only bound on call duration.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &FirecrawlConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}
