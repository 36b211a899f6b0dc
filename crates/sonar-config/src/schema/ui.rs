//! Front end (transcript and input) settings.

use serde::{Deserialize, Serialize};

/// Transcript and input behaviour of the chat front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Persistent entry shown at the top of the transcript. Empty disables it.
    pub welcome_message: String,
    /// Predefined prompts offered until the first exchange.
    pub suggestions: Vec<String>,
    /// Reserved input that clears the session.
    pub clear_command: String,
    /// Text of the pending/typing indicator.
    pub pending_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            welcome_message: "Hi! Ask me about any strain and I'll search for it.".into(),
            suggestions: vec![
                "What is the lineage of GG #4?".into(),
                "Which strains are similar to Sour Diesel?".into(),
                "What flavors is Blue Dream known for?".into(),
            ],
            clear_command: "/clear".into(),
            pending_label: "Researching...".into(),
        }
    }
}
