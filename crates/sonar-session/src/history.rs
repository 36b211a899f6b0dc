//! Bounded conversation history.

use std::collections::VecDeque;

use crate::ConversationTurn;

/// Ten user/assistant exchanges.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Ordered turns, oldest first, never longer than `limit`.
///
/// Appending past the limit drops turns from the front.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    turns: VecDeque<ConversationTurn>,
    limit: usize,
}

impl ConversationHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Append a completed exchange: the user turn, then the assistant turn.
    pub fn push_exchange(&mut self, query: impl Into<String>, response: impl Into<String>) {
        self.turns.push_back(ConversationTurn::user(query));
        self.turns.push_back(ConversationTurn::assistant(response));
        self.truncate_front();
    }

    /// Change the cap, trimming immediately if the history is now too long.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.truncate_front();
    }

    fn truncate_front(&mut self) {
        while self.turns.len() > self.limit {
            self.turns.pop_front();
        }
    }

    /// Owned copy of the turns, oldest first.
    pub fn snapshot(&self) -> Vec<ConversationTurn> {
        self.turns.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
