//! Terminal implementation of the session's rendering boundary.
//!
//! Bot markup (`<strong>`, `<em>`, `<br>`) is translated to ANSI styling,
//! or stripped when color is off. User turns are printed verbatim.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use regex::Regex;
use sonar_config::schema::UiConfig;
use sonar_session::{RenderRole, Renderer};

const BOLD: &str = "\x1b[1m";
const BOLD_OFF: &str = "\x1b[22m";
const ITALIC: &str = "\x1b[3m";
const ITALIC_OFF: &str = "\x1b[23m";
const CLEAR_LINE: &str = "\r\x1b[2K";

struct Markup {
    strong: Regex,
    em: Regex,
}

fn markup() -> &'static Markup {
    static MARKUP: OnceLock<Markup> = OnceLock::new();
    MARKUP.get_or_init(|| Markup {
        strong: Regex::new(r"<strong>(.*?)</strong>").expect("valid strong regex"),
        em: Regex::new(r"<em>(.*?)</em>").expect("valid em regex"),
    })
}

/// Translate bot markup into terminal text.
pub fn markup_to_terminal(text: &str, color: bool) -> String {
    let m = markup();
    let (strong, em) = if color {
        (
            format!("{BOLD}${{1}}{BOLD_OFF}"),
            format!("{ITALIC}${{1}}{ITALIC_OFF}"),
        )
    } else {
        ("${1}".to_string(), "${1}".to_string())
    };
    let text = m.strong.replace_all(text, strong.as_str());
    let text = m.em.replace_all(&text, em.as_str());
    text.replace("<br>", "\n")
}

/// Renders the transcript as lines on a writer (stdout in the binary).
pub struct TerminalRenderer<W: Write + Send> {
    out: Mutex<W>,
    welcome: String,
    suggestions: Vec<String>,
    pending_label: String,
    color: bool,
    suggestions_visible: AtomicBool,
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W, ui: &UiConfig, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            welcome: ui.welcome_message.clone(),
            suggestions: ui.suggestions.clone(),
            pending_label: ui.pending_label.clone(),
            color,
            suggestions_visible: AtomicBool::new(false),
        }
    }

    /// Print the welcome entry and the suggestion list.
    pub fn show_intro(&self) {
        self.write(&self.intro());
        self.suggestions_visible.store(true, Ordering::Release);
    }

    fn intro(&self) -> String {
        let mut text = String::new();
        if !self.welcome.is_empty() {
            text.push_str(&format!("bot> {}\n", self.welcome));
        }
        text.push_str(&self.suggestion_list());
        text
    }

    fn suggestion_list(&self) -> String {
        self.suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| format!("  /{} {s}\n", i + 1))
            .collect()
    }

    fn write(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::debug!("terminal write failed: {e}");
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Renderer for TerminalRenderer<W> {
    fn render_turn(&self, text: &str, role: RenderRole, as_markup: bool) {
        let line = match role {
            RenderRole::User => {
                // Suggestions disappear once the user has asked something.
                self.suggestions_visible.store(false, Ordering::Release);
                format!("you> {text}\n")
            }
            RenderRole::Bot if as_markup => {
                format!("bot> {}\n", markup_to_terminal(text, self.color))
            }
            RenderRole::Bot => format!("bot> {text}\n"),
        };
        self.write(&line);
    }

    fn set_pending_indicator(&self, visible: bool) {
        if visible {
            self.write(&format!("{} ", self.pending_label));
        } else {
            self.write(CLEAR_LINE);
        }
    }

    fn reset_transcript(&self, keep_welcome: bool) {
        let mut text = String::from("\x1b[2J\x1b[H");
        if keep_welcome && !self.welcome.is_empty() {
            text.push_str(&format!("bot> {}\n", self.welcome));
        }
        self.write(&text);
    }

    fn set_suggestions_visible(&self, visible: bool) {
        let was = self.suggestions_visible.swap(visible, Ordering::AcqRel);
        if visible && !was {
            self.write(&self.suggestion_list());
        }
    }
}
