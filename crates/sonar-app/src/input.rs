//! Mapping raw input lines to session actions.

use sonar_config::schema::UiConfig;

const QUIT_COMMANDS: &[&str] = &["/quit", "/exit"];

/// What a line of input asks the front end to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Nothing to do (blank line).
    Skip,
    Submit(String),
    Clear,
    Quit,
    /// `/N` outside the offered range, or any other unknown command.
    Unknown(String),
}

/// Interpret one input line. Suggestions are selected with `/1`..`/N`.
pub fn parse_line(line: &str, ui: &UiConfig) -> InputAction {
    let line = line.trim();
    if line.is_empty() {
        return InputAction::Skip;
    }
    if line == ui.clear_command {
        return InputAction::Clear;
    }
    if QUIT_COMMANDS.contains(&line) {
        return InputAction::Quit;
    }
    if let Some(rest) = line.strip_prefix('/') {
        return match rest.parse::<usize>() {
            Ok(n) if n >= 1 && n <= ui.suggestions.len() => {
                InputAction::Submit(ui.suggestions[n - 1].clone())
            }
            _ => InputAction::Unknown(line.to_string()),
        };
    }
    InputAction::Submit(line.to_string())
}
