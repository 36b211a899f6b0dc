//! Full configuration validation.
//!
//! Validates numeric ranges, the endpoint URL, and the templates the
//! session relies on.

use std::sync::OnceLock;

use crate::schema::{SonarConfig, QUERY_PLACEHOLDER};
use regex::Regex;
use sonar_common::ConfigError;

fn endpoint_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://[^\s/]+(/\S*)?$").expect("valid endpoint regex"))
}

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SonarConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Search service
    if !endpoint_pattern().is_match(&config.search.endpoint) {
        errors.push(format!(
            "search.endpoint = {:?} is not an http(s) URL",
            config.search.endpoint
        ));
    }
    if let Some(secs) = config.search.request_timeout_secs {
        validate_range(&mut errors, "search.request_timeout_secs", secs, 1, 600);
    }

    // History holds whole exchanges
    let limit = u64::from(config.session.history_limit);
    validate_range(&mut errors, "session.history_limit", limit, 2, 200);
    if limit % 2 != 0 {
        errors.push(format!(
            "session.history_limit = {limit} must be even (user/assistant pairs)"
        ));
    }
    if !config.session.fallback_message.contains(QUERY_PLACEHOLDER) {
        errors.push(format!(
            "session.fallback_message must contain {QUERY_PLACEHOLDER}"
        ));
    }

    // Input
    if !config.ui.clear_command.starts_with('/') || config.ui.clear_command.len() < 2 {
        errors.push(format!(
            "ui.clear_command = {:?} must be a '/'-prefixed command",
            config.ui.clear_command
        ));
    }
    validate_range(
        &mut errors,
        "ui.suggestions",
        config.ui.suggestions.len() as u64,
        0,
        9,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
