//! Retriever configuration: API key and endpoint resolution.
//!
//! [`FirecrawlConfig`] is resolved once from an explicit override set and an
//! explicit environment snapshot, then treated as immutable by the client.
//! Precedence for both values: explicit override → environment → built-in
//! default. The query and normalization logic never reads ambient global
//! state.

use crate::error::SearchError;

/// The provider's hosted endpoint, already at its `/v1` path.
pub const DEFAULT_ENDPOINT: &str = "https://api.firecrawl.dev/v1";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "FIRECRAWL_API_KEY";

/// Environment variable holding the server base URL.
pub const SERVER_URL_VAR: &str = "FIRECRAWL_SERVER_URL";

/// Request timeout applied when none is configured, in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// Explicit per-call configuration overrides.
///
/// Overrides take precedence over the environment snapshot; empty strings
/// are treated as unset and fall through to the next layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// API key override.
    pub api_key: Option<String>,
    /// Server base-URL override.
    pub server_url: Option<String>,
}

/// Snapshot of the process environment variables relevant to the retriever.
///
/// Captured once via [`EnvConfig::capture`]; tests construct snapshots
/// directly instead of mutating the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// Value of [`API_KEY_VAR`], if set.
    pub api_key: Option<String>,
    /// Value of [`SERVER_URL_VAR`], if set.
    pub server_url: Option<String>,
}

impl EnvConfig {
    /// Capture the relevant variables from the process environment.
    pub fn capture() -> Self {
        Self {
            api_key: std::env::var(API_KEY_VAR).ok(),
            server_url: std::env::var(SERVER_URL_VAR).ok(),
        }
    }
}

/// Resolved, immutable configuration for a Firecrawl client.
#[derive(Debug, Clone)]
pub struct FirecrawlConfig {
    /// Bearer token for the provider. Empty for passwordless self-hosted
    /// servers; requests then go out without an `Authorization` header.
    pub api_key: String,
    /// Canonical versioned base URL with no trailing slash. Always contains
    /// a `/v1` or `/v2` segment after resolution.
    pub endpoint_base: String,
    /// HTTP request timeout in seconds. A single attempt per call; no retry.
    pub timeout_seconds: u64,
}

impl FirecrawlConfig {
    /// Resolve configuration from overrides and an environment snapshot.
    ///
    /// Never fails. A missing API key is a valid terminal state and only
    /// emits an advisory log; the endpoint falls back to the hosted default
    /// and is canonicalized to a versioned base path.
    pub fn resolve(overrides: &Overrides, env: &EnvConfig) -> Self {
        let api_key = pick(&overrides.api_key, &env.api_key).unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!(
                "Firecrawl API key not set (optional for self-hosted servers); \
                 requests will be unauthenticated"
            );
        }

        let raw_endpoint = pick(&overrides.server_url, &env.server_url)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            api_key,
            endpoint_base: canonicalize_endpoint(&raw_endpoint),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Resolve from the process environment alone.
    ///
    /// Shorthand for [`FirecrawlConfig::resolve`] with no overrides and a
    /// freshly captured [`EnvConfig`].
    pub fn from_env() -> Self {
        Self::resolve(&Overrides::default(), &EnvConfig::capture())
    }

    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `endpoint_base` must parse as an absolute URL
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if url::Url::parse(&self.endpoint_base).is_err() {
            return Err(SearchError::Config(format!(
                "endpoint_base is not a valid URL: {}",
                self.endpoint_base
            )));
        }
        Ok(())
    }
}

/// First non-empty value wins; empty strings count as unset.
fn pick(override_value: &Option<String>, env_value: &Option<String>) -> Option<String> {
    [override_value, env_value]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .cloned()
}

/// Strip trailing path separators and guarantee a version segment.
///
/// If the stripped URL contains neither `/v1` nor `/v2`, the lowest
/// supported version (`/v1`) is appended so downstream request construction
/// can assume a stable base path.
pub(crate) fn canonicalize_endpoint(raw: &str) -> String {
    let base = raw.trim_end_matches('/');
    if base.contains("/v1") || base.contains("/v2") {
        base.to_string()
    } else {
        format!("{base}/v1")
    }
}
