//! Search client struct and response handling.

use crate::{ExchangeError, SearchResponse};

use super::config::SearchClientConfig;

/// Longest slice of an error body kept for logs.
const ERROR_BODY_PREVIEW: usize = 200;

/// Search service client over HTTP.
pub struct HttpSearchClient {
    pub(crate) config: SearchClientConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpSearchClient {
    pub fn new(config: SearchClientConfig) -> Result<Self, ExchangeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ExchangeError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Turn a raw HTTP reply into a [`SearchResponse`].
    pub(crate) async fn read_response(
        response: reqwest::Response,
    ) -> Result<SearchResponse, ExchangeError> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = text.chars().take(ERROR_BODY_PREVIEW).collect::<String>();
            return Err(ExchangeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| ExchangeError::Decode(e.to_string()))
    }
}
