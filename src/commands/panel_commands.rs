//! Slash-command parser for the interactive chat panel
//!
//! This module parses the special commands that can be entered during an
//! interactive session. Special commands control the panel itself rather
//! than being dispatched to the backend:
//! - Open or close the panel
//! - Start a speech capture pass
//! - Switch the language
//! - Pick a suggested reply
//! - View status, help, or exit
//!
//! Commands are prefixed with `/` and are case-insensitive.

use crate::config::languages;

/// Special commands that can be executed during an interactive session
///
/// These commands modify the panel state or provide information,
/// rather than being dispatched to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    /// Open the chat panel
    Open,

    /// Close the chat panel
    ///
    /// Closing does not cancel an in-flight dispatch; the reply still
    /// lands on the log.
    Close,

    /// Start a speech capture pass
    ///
    /// The transcript is placed into the pending-input slot and is not
    /// auto-dispatched.
    Capture,

    /// Switch the language used for speech capabilities
    ///
    /// `/lang` with no argument lists the known languages.
    SwitchLanguage(Option<String>),

    /// Dispatch a suggested reply by its 1-based number
    ///
    /// `/suggest` with no argument lists the suggestions.
    Suggest(Option<usize>),

    /// Display current panel status
    ShowStatus,

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command
    ///
    /// The input should be dispatched as a regular message.
    None,

    /// Unknown command or bad argument; the string is a user-facing notice
    Invalid(String),
}

/// Parse a line of input into a panel command
///
/// # Arguments
///
/// * `input` - Trimmed line of user input
///
/// # Examples
///
/// ```
/// use chatling::commands::panel_commands::{parse_panel_command, PanelCommand};
///
/// assert_eq!(parse_panel_command("/close"), PanelCommand::Close);
/// assert_eq!(parse_panel_command("hello"), PanelCommand::None);
/// ```
pub fn parse_panel_command(input: &str) -> PanelCommand {
    if !input.starts_with('/') {
        return PanelCommand::None;
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    match command.as_str() {
        "/open" => PanelCommand::Open,
        "/close" => PanelCommand::Close,
        "/mic" | "/capture" => PanelCommand::Capture,
        "/lang" | "/language" => match arg {
            Some(tag) => {
                let tag = tag.to_lowercase();
                if languages().iter().any(|(known, _)| *known == tag) {
                    PanelCommand::SwitchLanguage(Some(tag))
                } else {
                    PanelCommand::Invalid(format!(
                        "Unknown language: {} (try /lang to list languages)",
                        tag
                    ))
                }
            }
            None => PanelCommand::SwitchLanguage(None),
        },
        "/suggest" => match arg {
            Some(n) => match n.parse::<usize>() {
                Ok(index) => PanelCommand::Suggest(Some(index)),
                Err(_) => PanelCommand::Invalid(format!(
                    "Invalid suggestion number: {} (usage: /suggest <n>)",
                    n
                )),
            },
            None => PanelCommand::Suggest(None),
        },
        "/status" => PanelCommand::ShowStatus,
        "/help" => PanelCommand::Help,
        "/quit" | "/exit" => PanelCommand::Exit,
        other => PanelCommand::Invalid(format!(
            "Unknown command: {}\n\nType '/help' to see available commands",
            other
        )),
    }
}

/// Print help for the panel commands
pub fn print_help() {
    println!("Available commands:");
    println!("  /open            Open the chat panel");
    println!("  /close           Close the chat panel");
    println!("  /mic             Capture speech into the input line");
    println!("  /lang [tag]      Switch language, or list languages");
    println!("  /suggest [n]     Send a suggested reply, or list them");
    println!("  /status          Show panel status");
    println!("  /help            Show this help");
    println!("  /quit            Exit");
    println!();
    println!("Anything else is sent to the chat endpoint.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_none() {
        assert_eq!(parse_panel_command("hello there"), PanelCommand::None);
        assert_eq!(parse_panel_command("what/ever"), PanelCommand::None);
    }

    #[test]
    fn test_open_close() {
        assert_eq!(parse_panel_command("/open"), PanelCommand::Open);
        assert_eq!(parse_panel_command("/close"), PanelCommand::Close);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(parse_panel_command("/OPEN"), PanelCommand::Open);
        assert_eq!(parse_panel_command("/Mic"), PanelCommand::Capture);
    }

    #[test]
    fn test_capture_aliases() {
        assert_eq!(parse_panel_command("/mic"), PanelCommand::Capture);
        assert_eq!(parse_panel_command("/capture"), PanelCommand::Capture);
    }

    #[test]
    fn test_lang_with_known_tag() {
        assert_eq!(
            parse_panel_command("/lang fr"),
            PanelCommand::SwitchLanguage(Some("fr".to_string()))
        );
        assert_eq!(
            parse_panel_command("/language HI"),
            PanelCommand::SwitchLanguage(Some("hi".to_string()))
        );
    }

    #[test]
    fn test_lang_without_arg_lists() {
        assert_eq!(
            parse_panel_command("/lang"),
            PanelCommand::SwitchLanguage(None)
        );
    }

    #[test]
    fn test_lang_unknown_tag_is_invalid() {
        let parsed = parse_panel_command("/lang xx");
        assert!(matches!(parsed, PanelCommand::Invalid(_)));
    }

    #[test]
    fn test_suggest_with_number() {
        assert_eq!(
            parse_panel_command("/suggest 2"),
            PanelCommand::Suggest(Some(2))
        );
    }

    #[test]
    fn test_suggest_without_arg_lists() {
        assert_eq!(parse_panel_command("/suggest"), PanelCommand::Suggest(None));
    }

    #[test]
    fn test_suggest_bad_number_is_invalid() {
        let parsed = parse_panel_command("/suggest two");
        assert!(matches!(parsed, PanelCommand::Invalid(_)));
    }

    #[test]
    fn test_exit_aliases() {
        assert_eq!(parse_panel_command("/quit"), PanelCommand::Exit);
        assert_eq!(parse_panel_command("/exit"), PanelCommand::Exit);
    }

    #[test]
    fn test_unknown_command_is_invalid() {
        let parsed = parse_panel_command("/frobnicate");
        if let PanelCommand::Invalid(msg) = parsed {
            assert!(msg.contains("/frobnicate"));
            assert!(msg.contains("/help"));
        } else {
            panic!("Expected Invalid");
        }
    }

    #[test]
    fn test_status_and_help() {
        assert_eq!(parse_panel_command("/status"), PanelCommand::ShowStatus);
        assert_eq!(parse_panel_command("/help"), PanelCommand::Help);
    }
}
