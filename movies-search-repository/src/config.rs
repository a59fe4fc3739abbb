//! Connection configuration for the search index backend.

use std::env;
use std::time::Duration;

use crate::opensearch::INDEX_NAME;

/// Default OpenSearch URL.
pub const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the search index.
///
/// The request timeout is the only timeout on the serving path: a request that
/// exceeds it fails and the error is returned to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchIndexConfig {
    /// The OpenSearch server URL (e.g., "http://localhost:9200").
    pub url: String,
    /// The name of the movies index.
    pub index: String,
    /// Timeout applied to every request sent to the backend.
    pub request_timeout: Duration,
}

impl Default for SearchIndexConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OPENSEARCH_URL.to_string(),
            index: INDEX_NAME.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl SearchIndexConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `MOVIES_INDEX`: Index name (default: "movies")
    /// - `OPENSEARCH_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let url = env::var("OPENSEARCH_URL").unwrap_or(defaults.url);
        let index = env::var("MOVIES_INDEX").unwrap_or(defaults.index);
        let request_timeout = env::var("OPENSEARCH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        Self {
            url,
            index,
            request_timeout,
        }
    }
}
