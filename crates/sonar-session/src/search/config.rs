//! Search client configuration.

use std::time::Duration;

/// Search client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchClientConfig {
    pub endpoint: String,
    /// Overall request timeout. `None` waits for the transport.
    pub request_timeout: Option<Duration>,
}

impl SearchClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            request_timeout: None,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}
