//! # firecrawl-search
//!
//! Search-provider retrieval adapter for the Firecrawl search API.
//!
//! Issues a query to a hosted or self-hosted Firecrawl endpoint and maps the
//! provider's JSON response — which varies with whether scraping was
//! requested — into a uniform list of `{href, body}` records.
//!
//! ## Design
//!
//! - Configuration resolved once: explicit overrides → environment → defaults,
//!   with the endpoint canonicalized to a versioned base path
//! - Optional domain restriction via `site:` query rewriting
//! - Failures never propagate: every error degrades to an empty result list
//!   with a logged diagnostic, so the adapter composes inside multi-provider
//!   fan-outs without call-site error handling
//!
//! ## Security
//!
//! - Bearer token attached only when a key is configured; an empty key is
//!   valid for passwordless self-hosted servers
//! - No secrets in error messages
//! - Query text is logged at trace level only

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
mod response;
pub mod types;

pub use client::FirecrawlClient;
pub use config::{EnvConfig, FirecrawlConfig, Overrides};
pub use error::{Result, SearchError};
pub use types::SearchResult;

/// Search the web via Firecrawl with the given configuration.
///
/// Convenience wrapper that builds a [`FirecrawlClient`] for a single
/// unrestricted call. Never fails: configuration, transport, and protocol
/// problems all degrade to an empty result list with a logged diagnostic.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// let config = firecrawl_search::FirecrawlConfig::from_env();
/// let results = firecrawl_search::search("Python web scraping", 3, &config).await;
/// for result in &results {
///     println!("{}: {}", result.href, result.body);
/// }
/// # }
/// ```
pub async fn search(query: &str, max_results: u32, config: &FirecrawlConfig) -> Vec<SearchResult> {
    match FirecrawlClient::new(config.clone()) {
        Ok(client) => client.search(query, max_results, &[]).await,
        Err(err) => {
            tracing::warn!(error = %err, "Firecrawl client construction failed");
            Vec::new()
        }
    }
}
