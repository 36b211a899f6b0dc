//! Query submission: the single-flight request/response exchange.

use sonar_common::new_request_id;
use tracing::{debug, warn};

use crate::format::format_bot_message;
use crate::{RenderRole, SearchRequest};

use super::manager::SessionController;
use super::types::{BusyGuard, IgnoreReason, SubmitOutcome};

impl SessionController {
    /// Ask the search service one question and render the exchange.
    ///
    /// Empty queries and queries submitted while another is in flight are
    /// dropped without side effects. History only changes when a reply
    /// arrives successfully for the current generation; failures show the
    /// fallback message instead and leave history untouched.
    pub async fn submit_query(&self, query: &str) -> SubmitOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::EmptyQuery);
        }

        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            debug!(session = %self.id.short(), "request in flight, dropping query");
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        };

        // User text is never interpreted as markup.
        self.renderer.render_turn(query, RenderRole::User, false);
        self.renderer.set_pending_indicator(true);

        let (request, generation) = {
            let state = self.lock_state();
            let request = SearchRequest {
                query: query.to_string(),
                conversation_history: state.history.snapshot(),
            };
            (request, state.generation)
        };

        let request_id = new_request_id();
        debug!(
            session = %self.id.short(),
            request = %request_id,
            history = request.conversation_history.len(),
            "submitting query"
        );

        let result = self.client.search(&request).await;

        self.renderer.set_pending_indicator(false);

        // Staleness check and append happen under one lock; rendering waits
        // until it is released so renderers may read the session back.
        let history_len = {
            let mut state = self.lock_state();
            if state.generation != generation {
                None
            } else {
                if let Ok(reply) = &result {
                    state.history.push_exchange(query, reply.response.as_str());
                }
                Some(state.history.len())
            }
        };
        let Some(history_len) = history_len else {
            debug!(request = %request_id, "session cleared during request, discarding reply");
            return SubmitOutcome::Discarded;
        };

        match result {
            Ok(reply) => {
                self.renderer
                    .render_turn(&format_bot_message(&reply.response), RenderRole::Bot, true);
                debug!(request = %request_id, history = history_len, "exchange complete");
                SubmitOutcome::Answered(reply.response)
            }
            Err(e) => {
                warn!(request = %request_id, "search exchange failed: {e}");
                // Contains the user's query verbatim, so it stays plain text.
                self.renderer
                    .render_turn(&self.fallback_message(query), RenderRole::Bot, false);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
