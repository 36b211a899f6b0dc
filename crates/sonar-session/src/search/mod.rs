//! HTTP client for the backend search endpoint.
//!
//! POSTs `{ query, conversation_history }` as JSON and reads the
//! `response` field of a 2xx JSON reply.

mod api;
mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::HttpSearchClient;
pub use config::SearchClientConfig;
