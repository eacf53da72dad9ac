//! Command handlers for the Chatling CLI
//!
//! Each subcommand gets its own module: `chat` runs the interactive
//! panel loop, `send` performs a one-shot dispatch. The slash-command
//! parser shared by the interactive loop lives in `panel_commands`.

pub mod chat;
pub mod panel_commands;
pub mod send;

pub use chat::run_chat;
pub use send::run_send;
