//! Error types for the firecrawl-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. No API keys or sensitive data appear in
//! error messages.

/// Errors that can occur during a Firecrawl search operation.
///
/// These stay internal to a call: the public [`crate::FirecrawlClient::search`]
/// boundary collapses every variant to an empty result list, while
/// [`crate::FirecrawlClient::try_search`] keeps the cause inspectable.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Invalid retriever configuration.
    #[error("config error: {0}")]
    Config(String),

    /// An HTTP request to the provider failed at the transport level
    /// (connection refused, timeout, DNS failure).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider answered with a non-success HTTP status.
    #[error("unexpected status {code}: {body}")]
    Status {
        /// The HTTP status code returned by the provider.
        code: u16,
        /// The response body, included verbatim for diagnostics.
        body: String,
    },

    /// The provider reported an unsuccessful search in the response body.
    #[error("search unsuccessful: {0}")]
    Api(String),

    /// Failed to parse the provider response as the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience type alias for firecrawl-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
