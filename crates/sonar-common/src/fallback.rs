//! Fallback bot message shown when a search exchange fails.

/// Placeholder substituted with the user's query.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Default fallback template.
pub const DEFAULT_FALLBACK_TEMPLATE: &str =
    "I'm having trouble connecting right now, so I couldn't look up \"{query}\". \
     Please try again in a moment.";

/// Fill `template` with `query`. The result always contains the query
/// verbatim: a template without the placeholder gets it appended.
pub fn fill_fallback(template: &str, query: &str) -> String {
    if template.contains(QUERY_PLACEHOLDER) {
        template.replace(QUERY_PLACEHOLDER, query)
    } else {
        format!("{} \"{query}\"", template.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_contains_query() {
        let msg = fill_fallback(DEFAULT_FALLBACK_TEMPLATE, "gg #4");
        assert!(msg.contains("\"gg #4\""));
        assert!(!msg.contains(QUERY_PLACEHOLDER));
    }

    #[test]
    fn every_placeholder_is_filled() {
        assert_eq!(fill_fallback("{query}? {query}!", "og"), "og? og!");
    }

    #[test]
    fn template_without_placeholder_gets_query_appended() {
        assert_eq!(
            fill_fallback("Search is unavailable. ", "blue <dream>"),
            "Search is unavailable. \"blue <dream>\""
        );
    }
}
