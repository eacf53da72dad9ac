//! Interactive chat panel
//!
//! Runs the terminal rendition of the chat panel: a rustyline loop that
//! dispatches plain text to the backend and handles slash commands for
//! panel control, speech capture, language switching, and suggested
//! replies. The panel starts closed; `/open` (or the initial toggle at
//! startup) opens it and seeds the greeting.

use crate::backend::create_backend;
use crate::commands::panel_commands::{parse_panel_command, print_help, PanelCommand};
use crate::config::{languages, Config};
use crate::dispatch::Dispatcher;
use crate::mirror::SessionMirror;
use crate::panel::PanelStateMachine;
use crate::session::{Message, Sender};
use crate::speech::{CommandRecognizer, CommandSynthesizer, SpeechInput, SpeechOutput};
use crate::suggestions::Suggestions;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::Arc;

/// Run the interactive chat panel
///
/// # Arguments
///
/// * `config` - Validated configuration
///
/// # Errors
///
/// Returns an error if the backend cannot be created or the terminal
/// editor cannot be initialized. Dispatch failures never surface here;
/// they degrade to placeholder messages in the log.
pub async fn run_chat(config: Config) -> crate::error::Result<()> {
    let backend = Arc::from(create_backend(&config.backend)?);
    let mut dispatcher = Dispatcher::new(backend, &config.log);

    let synthesizer: Option<Arc<dyn SpeechOutput>> = config
        .speech
        .synthesizer
        .as_ref()
        .map(|program| Arc::new(CommandSynthesizer::new(program)) as Arc<dyn SpeechOutput>);

    if config.chat.speak_replies {
        match &synthesizer {
            Some(output) => {
                dispatcher =
                    dispatcher.with_speech_output(output.clone(), config.chat.language.clone());
            }
            None => {
                println!(
                    "{}",
                    "Spoken replies requested but no synthesizer is configured".yellow()
                );
            }
        }
    }

    let recognizer: Option<CommandRecognizer> = config
        .speech
        .recognizer
        .as_ref()
        .map(CommandRecognizer::new);

    mirror_session(&config, &dispatcher);

    let mut state = PanelStateMachine::new(config.chat.language.clone());
    let suggestions = Suggestions::new(config.chat.suggestions.clone());

    // Starting the CLI counts as mounting the panel: open it and greet.
    state.toggle_panel();
    dispatcher.seed_greeting(config.chat.greeting.clone());
    print_message(dispatcher.log().last());

    println!(
        "Session {} (type '/help' for commands)",
        dispatcher.session().id.dimmed()
    );

    let mut editor = DefaultEditor::new()
        .map_err(|e| crate::error::ChatlingError::Config(format!("Terminal setup failed: {}", e)))?;

    // Transcript from the last capture pass, pre-filled into the next
    // input line rather than auto-dispatched.
    let mut pending: Option<String> = None;

    loop {
        let prompt = state.format_colored_prompt();
        let readline = match pending.take() {
            Some(transcript) => editor.readline_with_initial(&prompt, (transcript.as_str(), "")),
            None => editor.readline(&prompt),
        };

        let line = match readline {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                tracing::warn!("Readline error: {}", e);
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            // Empty input is a silent no-op, same as an empty dispatch.
            continue;
        }
        let _ = editor.add_history_entry(input);

        match parse_panel_command(input) {
            PanelCommand::Open => {
                if state.panel.is_open() {
                    println!("Panel is already open");
                } else {
                    state.toggle_panel();
                    println!("Panel {}", "opened".green());
                }
            }
            PanelCommand::Close => {
                if state.panel.is_open() {
                    state.toggle_panel();
                    println!("Panel {} (log is kept; /open to return)", "closed".yellow());
                } else {
                    println!("Panel is already closed");
                }
            }
            PanelCommand::Capture => {
                if !state.panel.is_open() {
                    println!("{}", "Open the panel first with /open".yellow());
                    continue;
                }
                pending = capture_transcript(&recognizer, &mut state).await;
            }
            PanelCommand::SwitchLanguage(Some(tag)) => {
                let old = state.switch_language(tag.clone());
                dispatcher.set_language(tag.clone());
                println!("Language switched from {} to {}", old, tag.bold());
            }
            PanelCommand::SwitchLanguage(None) => {
                println!("Available languages:");
                for (tag, name) in languages() {
                    let marker = if *tag == state.language { "*" } else { " " };
                    println!("  {} {} - {}", marker, tag.bold(), name);
                }
            }
            PanelCommand::Suggest(Some(index)) => {
                if !state.panel.is_open() {
                    println!("{}", "Open the panel first with /open".yellow());
                    continue;
                }
                match suggestions.select(index) {
                    Some(phrase) => {
                        let phrase = phrase.to_string();
                        dispatch_and_print(&mut dispatcher, &mut state, &phrase).await;
                    }
                    None => println!(
                        "No suggestion {} (1..={} available)",
                        index,
                        suggestions.len()
                    ),
                }
            }
            PanelCommand::Suggest(None) => {
                if suggestions.is_empty() {
                    println!("No suggestions configured");
                } else {
                    println!("Suggested replies:");
                    for (i, phrase) in suggestions.phrases().iter().enumerate() {
                        println!("  {}. {}", i + 1, phrase);
                    }
                }
            }
            PanelCommand::ShowStatus => {
                println!("Panel:    {}", state.panel);
                println!("Activity: {}", state.activity);
                println!("Language: {}", state.language);
                println!("Session:  {}", dispatcher.session().id);
                println!("Messages: {}", dispatcher.log().len());
            }
            PanelCommand::Help => print_help(),
            PanelCommand::Exit => {
                println!("Goodbye!");
                break;
            }
            PanelCommand::Invalid(notice) => println!("{}", notice.yellow()),
            PanelCommand::None => {
                if !state.panel.is_open() {
                    println!("{}", "Panel is closed; /open to chat".yellow());
                    continue;
                }
                dispatch_and_print(&mut dispatcher, &mut state, input).await;
            }
        }
    }

    Ok(())
}

/// Dispatch one message and print the resolved bot reply
async fn dispatch_and_print(dispatcher: &mut Dispatcher, state: &mut PanelStateMachine, text: &str) {
    state.begin_dispatch();
    let reply = dispatcher.send(text).await;
    print_message(reply);
    state.finish();
}

/// Run one recognition pass and return the transcript for the input line
async fn capture_transcript(
    recognizer: &Option<CommandRecognizer>,
    state: &mut PanelStateMachine,
) -> Option<String> {
    let Some(recognizer) = recognizer else {
        println!(
            "{}",
            "Speech recognition is not configured on this host".yellow()
        );
        return None;
    };

    state.begin_capture();
    println!("{}", "Listening...".cyan());
    let result = recognizer.capture(&state.language).await;
    state.finish();

    match result {
        Ok(transcript) if transcript.is_empty() => {
            println!("{}", "Heard nothing".yellow());
            None
        }
        Ok(transcript) => Some(transcript),
        Err(e) => {
            println!("{} {}", "Capture failed:".yellow(), e);
            None
        }
    }
}

/// Mirror the session id for diagnostics; failures log and continue
fn mirror_session(config: &Config, dispatcher: &Dispatcher) {
    if !config.mirror.enabled {
        return;
    }

    let opened = match &config.mirror.path {
        Some(path) => SessionMirror::open_at(path.clone()),
        None => SessionMirror::open(),
    };

    let result = opened.and_then(|mirror| mirror.record(dispatcher.session()));
    if let Err(e) = result {
        tracing::warn!("Session mirror unavailable: {}", e);
    }
}

/// Print one log message with its timestamp and a colored sender tag
fn print_message(message: Option<&Message>) {
    let Some(message) = message else {
        return;
    };

    let tag = match message.sender {
        Sender::User => "you".blue(),
        Sender::Bot => "bot".green(),
    };
    println!("[{}] {}: {}", message.timestamp.dimmed(), tag, message.text);
}
