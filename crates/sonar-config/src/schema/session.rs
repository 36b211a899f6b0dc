//! Conversation session settings.

use serde::{Deserialize, Serialize};
use sonar_common::DEFAULT_FALLBACK_TEMPLATE;

pub use sonar_common::QUERY_PLACEHOLDER;

/// Conversation history and failure handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum retained turns (user + assistant). Must be even.
    pub history_limit: u32,
    /// Bot message shown when an exchange fails.
    pub fallback_message: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: 20,
            fallback_message: DEFAULT_FALLBACK_TEMPLATE.into(),
        }
    }
}
