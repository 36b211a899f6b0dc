//! Search service connection settings.

use serde::{Deserialize, Serialize};

/// Default backend endpoint (local development server).
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/search";

/// Where and how queries are sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Full URL of the POST search endpoint.
    pub endpoint: String,
    /// Overall request timeout. Unset means the request resolves whenever
    /// the transport does.
    pub request_timeout_secs: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            request_timeout_secs: None,
        }
    }
}
