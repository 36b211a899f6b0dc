//! SessionController struct, construction, and state management.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sonar_common::{fill_fallback, SessionId, DEFAULT_FALLBACK_TEMPLATE};
use tracing::info;

use crate::history::{ConversationHistory, DEFAULT_HISTORY_LIMIT};
use crate::{ConversationTurn, Renderer, SearchClient};

/// State guarded together so a clear and a late reply cannot interleave.
pub(super) struct SessionState {
    pub(super) history: ConversationHistory,
    /// Bumped on every clear. A reply is only applied if the generation it
    /// was sent under is still current.
    pub(super) generation: u64,
}

/// One chat session: history, single-flight state, and its collaborators.
pub struct SessionController {
    /// Session identity for log correlation.
    pub(super) id: SessionId,
    /// Search backend.
    pub(super) client: Arc<dyn SearchClient>,
    /// Presentation surface.
    pub(super) renderer: Arc<dyn Renderer>,
    /// History and generation.
    pub(super) state: Mutex<SessionState>,
    /// Whether a request is currently in flight.
    pub(super) busy: AtomicBool,
    /// Fallback message template; see [`fill_fallback`].
    pub(super) fallback_template: String,
}

impl SessionController {
    pub fn new(client: Arc<dyn SearchClient>, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            id: SessionId::new(),
            client,
            renderer,
            state: Mutex::new(SessionState {
                history: ConversationHistory::new(DEFAULT_HISTORY_LIMIT),
                generation: 0,
            }),
            busy: AtomicBool::new(false),
            fallback_template: DEFAULT_FALLBACK_TEMPLATE.to_string(),
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .history
            .set_limit(limit);
        self
    }

    /// Template for the failure message. `{query}` is replaced with the
    /// query; without it the query is appended.
    pub fn with_fallback_template(mut self, template: impl Into<String>) -> Self {
        self.fallback_template = template.into();
        self
    }

    pub(super) fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Build the fallback bot message for a failed query.
    pub(super) fn fallback_message(&self, query: &str) -> String {
        fill_fallback(&self.fallback_template, query)
    }

    /// Forget the conversation and restore the transcript to its initial
    /// state (welcome entry kept, suggestions visible).
    ///
    /// A request still in flight is not cancelled; its reply is discarded.
    pub fn clear_session(&self) {
        {
            let mut state = self.lock_state();
            state.history.clear();
            state.generation += 1;
        }
        info!(session = %self.id.short(), "session cleared");

        self.renderer.reset_transcript(true);
        self.renderer.set_suggestions_visible(true);
    }

    /// Copy of the conversation history, oldest first.
    pub fn history(&self) -> Vec<ConversationTurn> {
        self.lock_state().history.snapshot()
    }

    /// Number of turns in history.
    pub fn history_len(&self) -> usize {
        self.lock_state().history.len()
    }

    pub fn history_limit(&self) -> usize {
        self.lock_state().history.limit()
    }

    /// Whether a request is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn session_id(&self) -> &SessionId {
        &self.id
    }
}
