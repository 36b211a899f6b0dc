//! Conversation session engine for sonar-chat.
//!
//! Provides:
//! - A single-flight session controller with bounded conversation history
//! - An HTTP client for the backend search endpoint
//! - Bot message formatting (markdown-style markers to markup)
//! - A rendering boundary that front ends implement or consume as events

pub mod format;
pub mod history;
pub mod render;
pub mod search;
pub mod session;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use format::format_bot_message;
pub use history::{ConversationHistory, DEFAULT_HISTORY_LIMIT};
pub use render::{ChannelRenderer, RenderEvent, RenderRole, Renderer};
pub use search::{HttpSearchClient, SearchClientConfig};
pub use session::{IgnoreReason, SessionController, SubmitOutcome};

/// Backend search service.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ExchangeError>;
}

/// One message of the conversation, as stored in history and sent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Request body for the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    /// History as it was before this exchange.
    pub conversation_history: Vec<ConversationTurn>,
}

/// Success body of the search endpoint. Only `response` is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    pub response: String,
}

/// Why an exchange with the search service failed.
///
/// The session treats every variant the same way; the detail is only
/// used for logging.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Decode error: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_wire_field_names() {
        let request = SearchRequest {
            query: "blue dream".into(),
            conversation_history: vec![
                ConversationTurn::user("hi"),
                ConversationTurn::assistant("hello"),
            ],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "query": "blue dream",
                "conversation_history": [
                    {"role": "user", "content": "hi"},
                    {"role": "assistant", "content": "hello"},
                ]
            })
        );
    }

    #[test]
    fn response_ignores_extra_fields() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"response": "ok", "sources": ["a"], "took_ms": 12}"#)
                .unwrap();
        assert_eq!(parsed.response, "ok");
    }

    #[test]
    fn response_without_field_is_rejected() {
        let parsed = serde_json::from_str::<SearchResponse>(r#"{"answer": "ok"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn exchange_error_display() {
        let err = ExchangeError::Status {
            status: 503,
            body: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "HTTP 503: unavailable");
        assert_eq!(
            ExchangeError::Network("dns".into()).to_string(),
            "Network error: dns"
        );
    }
}
