//! Core types for normalized search results.

use serde::{Deserialize, Serialize};

/// A single normalized search result.
///
/// This is the only contract exposed to downstream consumers, regardless of
/// which response shape the provider answered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The URL of the result page. Always non-empty: items without a URL
    /// are dropped during normalization.
    pub href: String,
    /// Scraped or summarised page content. Never absent, but may be an
    /// empty string when the provider returned a URL with no content,
    /// title, or description.
    pub body: String,
}
