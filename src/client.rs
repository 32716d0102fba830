//! Firecrawl search client: request construction, transport, and the
//! never-fails search boundary.
//!
//! [`FirecrawlClient::search`] degrades every failure to an empty result
//! list with a logged diagnostic, so the adapter composes inside a
//! multi-provider fan-out without per-provider error handling at the call
//! site. [`FirecrawlClient::try_search`] keeps failure causes as typed
//! [`SearchError`] values.

use crate::config::FirecrawlConfig;
use crate::error::{Result, SearchError};
use crate::http;
use crate::query;
use crate::response::{self, SearchResponse};
use crate::types::SearchResult;
use serde::Serialize;

/// Wire payload for `POST {endpoint_base}/search`.
#[derive(Debug, Serialize)]
pub(crate) struct SearchPayload {
    query: String,
    limit: u32,
    #[serde(rename = "scrapeOptions")]
    scrape_options: ScrapeOptions,
}

#[derive(Debug, Serialize)]
struct ScrapeOptions {
    formats: Vec<&'static str>,
}

impl SearchPayload {
    /// Build the payload, applying the domain-restriction rewrite when
    /// `domains` is non-empty.
    pub(crate) fn new(query: &str, limit: u32, domains: &[String]) -> Self {
        Self {
            query: query::with_domain_filter(query, domains),
            limit,
            scrape_options: ScrapeOptions {
                formats: vec!["markdown"],
            },
        }
    }
}

/// Client for the Firecrawl search API.
///
/// Holds the resolved configuration and a reusable HTTP client.
/// Configuration is resolved once at construction and immutable afterwards;
/// every search call owns its own request/response lifecycle and touches no
/// shared mutable state, so concurrent calls on the same instance are safe.
#[derive(Debug)]
pub struct FirecrawlClient {
    config: FirecrawlConfig,
    client: reqwest::Client,
}

impl FirecrawlClient {
    /// Create a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: FirecrawlConfig) -> Result<Self> {
        config.validate()?;
        let client = http::build_client(&config)?;
        Ok(Self { config, client })
    }

    /// The resolved configuration this client was built with.
    pub fn config(&self) -> &FirecrawlConfig {
        &self.config
    }

    /// Search the web via the provider.
    ///
    /// Never fails: transport errors, non-success statuses, unsuccessful
    /// provider responses, and malformed bodies all degrade to an empty
    /// result list with a warn-level diagnostic. Result order matches the
    /// provider's `data.web` order.
    ///
    /// `domains` restricts the search via `site:` query rewriting; pass an
    /// empty slice for an unrestricted search. The rewrite biases ranking
    /// towards the listed domains rather than strictly excluding others.
    pub async fn search(&self, query: &str, limit: u32, domains: &[String]) -> Vec<SearchResult> {
        match self.try_search(query, limit, domains).await {
            Ok(results) => results,
            Err(err) => {
                tracing::warn!(error = %err, "Firecrawl search degraded to empty results");
                Vec::new()
            }
        }
    }

    /// Fallible search, keeping the failure cause inspectable.
    ///
    /// A single POST per call; the configured timeout is the only bound on
    /// duration and there is no retry.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] — the request failed at the transport level
    /// - [`SearchError::Status`] — the provider answered with a non-success
    ///   HTTP status
    /// - [`SearchError::Parse`] — the body was not the expected JSON shape
    /// - [`SearchError::Api`] — the provider reported an unsuccessful search
    pub async fn try_search(
        &self,
        query: &str,
        limit: u32,
        domains: &[String],
    ) -> Result<Vec<SearchResult>> {
        tracing::trace!(query, limit, "Firecrawl search");

        let payload = SearchPayload::new(query, limit, domains);
        let url = format!("{}/search", self.config.endpoint_base);

        let mut request = self.client.post(&url).json(&payload);
        if !self.config.api_key.is_empty() {
            request = request.bearer_auth(&self.config.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Firecrawl request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("Firecrawl response decode failed: {e}")))?;

        if !parsed.success {
            return Err(SearchError::Api(
                "provider reported an unsuccessful search".into(),
            ));
        }

        let Some(data) = parsed.data else {
            tracing::debug!("Firecrawl response carried no data");
            return Ok(Vec::new());
        };
        let Some(web) = data.web else {
            tracing::debug!("Firecrawl response carried no web results");
            return Ok(Vec::new());
        };

        Ok(response::normalize_web_items(&web))
    }
}
