//! Bot message formatting.
//!
//! Converts the markdown-style markers the search backend emits into
//! markup for the transcript. The output is inserted as rendered markup,
//! so only backend text may pass through here; user input and locally
//! built messages are rendered as plain text.

use std::sync::OnceLock;

use regex::Regex;

struct Patterns {
    strong: Regex,
    emphasis: Regex,
    bullet: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        strong: Regex::new(r"\*\*(.*?)\*\*").expect("valid strong regex"),
        emphasis: Regex::new(r"\*(.*?)\*").expect("valid emphasis regex"),
        // Line starts survive newline replacement as either the start of the
        // text or a `<br>`.
        bullet: Regex::new(r"(?im)(^|<br>)- ").expect("valid bullet regex"),
    })
}

/// Format backend response text for display as a bot turn.
///
/// Rules, in order:
/// 1. `**text**` becomes `<strong>text</strong>`
/// 2. `*text*` becomes `<em>text</em>`
/// 3. newlines become `<br>`
/// 4. lines starting with `- ` get a `• ` bullet instead
pub fn format_bot_message(text: &str) -> String {
    let p = patterns();
    let text = p.strong.replace_all(text, "<strong>$1</strong>");
    let text = p.emphasis.replace_all(&text, "<em>$1</em>");
    let text = text.replace('\n', "<br>");
    p.bullet.replace_all(&text, "${1}• ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        let text = "GG #4 is a hybrid with earthy, pungent notes.";
        assert_eq!(format_bot_message(text), text);
        assert_eq!(format_bot_message(&format_bot_message(text)), text);
    }

    #[test]
    fn strong_wraps_inner_text() {
        assert_eq!(format_bot_message("**x**"), "<strong>x</strong>");
    }

    #[test]
    fn strong_is_non_greedy() {
        assert_eq!(
            format_bot_message("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn emphasis_after_strong() {
        assert_eq!(
            format_bot_message("**Lineage:** *Chem's Sister* cross"),
            "<strong>Lineage:</strong> <em>Chem's Sister</em> cross"
        );
    }

    #[test]
    fn markers_do_not_span_lines() {
        assert_eq!(format_bot_message("*a\nb*"), "*a<br>b*");
    }

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(format_bot_message("one\ntwo\n"), "one<br>two<br>");
    }

    #[test]
    fn each_dash_line_is_bulleted() {
        let out = format_bot_message("- a\n- b");
        assert_eq!(out, "• a<br>• b");
        assert_eq!(out.matches("• ").count(), 2);
    }

    #[test]
    fn dash_inside_line_is_not_a_bullet() {
        assert_eq!(format_bot_message("Sativa - Hybrid"), "Sativa - Hybrid");
    }

    #[test]
    fn report_with_heading_and_list() {
        let out = format_bot_message("**Effects:**\n- Euphoria\n- *Relaxation*");
        assert_eq!(
            out,
            "<strong>Effects:</strong><br>• Euphoria<br>• <em>Relaxation</em>"
        );
    }
}
