//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# sonar-chat configuration
# Only override what you want to change -- missing fields use defaults.

[search]
# endpoint = "http://127.0.0.1:8000/search"
# request_timeout_secs = 60    # 1-600, unset = no timeout

[session]
# history_limit = 20           # 2-200, even (user/assistant pairs)
# fallback_message = "I'm having trouble connecting right now, so I couldn't look up \"{query}\". Please try again in a moment."

[ui]
# welcome_message = "Hi! Ask me about any strain and I'll search for it."
# suggestions = [
#   "What is the lineage of GG #4?",
#   "Which strains are similar to Sour Diesel?",
#   "What flavors is Blue Dream known for?",
# ]
# clear_command = "/clear"
# pending_label = "Researching..."

[logging]
# level = "INFO"               # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
