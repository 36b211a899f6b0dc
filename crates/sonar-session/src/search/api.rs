//! SearchClient trait implementation for HttpSearchClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{ExchangeError, SearchClient, SearchRequest, SearchResponse};

use super::client::HttpSearchClient;

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ExchangeError> {
        debug!(
            endpoint = %self.config.endpoint,
            history = request.conversation_history.len(),
            "search request"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("accept", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ExchangeError::Network(e.to_string()))?;

        Self::read_response(response).await
    }
}
