//! Conversation session controller.
//!
//! A `SessionController` owns the conversation history and the in-flight
//! flag, sends one query at a time to the search service, and tells a
//! [`Renderer`](crate::Renderer) what to show.

mod manager;
mod submit;
mod types;


pub use manager::SessionController;
pub use types::{IgnoreReason, SubmitOutcome};
