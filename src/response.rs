//! Provider response model and normalization.
//!
//! The search response varies with whether scraping was requested: fields
//! may be missing or nested differently, so every field is modeled as
//! optional and extraction applies an explicit fallback priority per field
//! instead of relying on implicit truthiness.

use crate::types::SearchResult;
use serde::Deserialize;

/// Top-level search response. An absent `success` flag is treated as false.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) success: bool,
    pub(crate) data: Option<SearchData>,
}

/// Provider result verticals. Only `web` is consumed; the `images` and
/// `news` verticals are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchData {
    pub(crate) web: Option<Vec<WebItem>>,
}

/// A single raw web result. Field presence varies between scraped and
/// unscraped responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WebItem {
    pub(crate) url: Option<String>,
    pub(crate) href: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) markdown: Option<String>,
    pub(crate) content: Option<String>,
}

impl WebItem {
    /// The canonical URL: `url`, falling back to `href`. Empty strings count
    /// as absent.
    fn link(&self) -> Option<&str> {
        first_non_empty(&[self.url.as_deref(), self.href.as_deref()])
    }

    /// Scraped content: `markdown`, then `description`, then `content`,
    /// first non-empty wins.
    fn content_text(&self) -> Option<&str> {
        first_non_empty(&[
            self.markdown.as_deref(),
            self.description.as_deref(),
            self.content.as_deref(),
        ])
    }

    /// Body used when no content field is populated: title and description
    /// composited, or the description alone (possibly empty) when the title
    /// is missing.
    fn title_summary(&self) -> String {
        let title = self.title.as_deref().unwrap_or_default();
        let description = self.description.as_deref().unwrap_or_default();
        if title.is_empty() {
            description.to_string()
        } else {
            format!("{title}\n\n{description}")
        }
    }
}

/// First non-empty candidate wins.
fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.is_empty())
}

/// Map raw web items into normalized results, preserving input order.
///
/// Items without a URL are dropped silently; only the aggregate kept/dropped
/// counts are logged.
pub(crate) fn normalize_web_items(items: &[WebItem]) -> Vec<SearchResult> {
    let mut results = Vec::with_capacity(items.len());
    for item in items {
        let Some(link) = item.link() else {
            continue;
        };
        let body = match item.content_text() {
            Some(content) => content.to_string(),
            None => item.title_summary(),
        };
        results.push(SearchResult {
            href: link.to_string(),
            body,
        });
    }
    tracing::debug!(
        kept = results.len(),
        dropped = items.len() - results.len(),
        "normalized web results"
    );
    results
}
