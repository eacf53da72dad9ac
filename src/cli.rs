//! Command-line interface definition for Chatling
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for the interactive chat panel and one-shot sends.

use clap::{Parser, Subcommand};

/// Chatling - Conversation session client
///
/// Talk to a remote chat endpoint from the terminal, with suggested
/// replies and optional speech input/output.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatling")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/chatling.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Chatling
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive chat panel
    Chat {
        /// Override the chat endpoint base URL from config
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Language tag for speech capabilities (en, es, hi, fr)
        #[arg(short, long)]
        language: Option<String>,

        /// Speak bot replies aloud when speech output is available
        #[arg(long)]
        speak: bool,

        /// Use the local canned-reply backend instead of the endpoint
        #[arg(long)]
        canned: bool,
    },

    /// Send a single message and print the reply
    Send {
        /// The message text to dispatch
        message: String,

        /// Override the chat endpoint base URL from config
        #[arg(short, long)]
        endpoint: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list (used in tests)
    ///
    /// # Arguments
    ///
    /// * `args` - Argument list including the binary name
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Endpoint override supplied on the command line, if any
    pub fn endpoint_override(&self) -> Option<&str> {
        match &self.command {
            Commands::Chat { endpoint, .. } | Commands::Send { endpoint, .. } => {
                endpoint.as_deref()
            }
        }
    }

    /// Language override supplied on the command line, if any
    pub fn language_override(&self) -> Option<&str> {
        match &self.command {
            Commands::Chat { language, .. } => language.as_deref(),
            Commands::Send { .. } => None,
        }
    }

    /// Whether the canned backend was requested
    pub fn wants_canned(&self) -> bool {
        matches!(self.command, Commands::Chat { canned: true, .. })
    }

    /// Whether spoken replies were requested
    pub fn wants_speech_output(&self) -> bool {
        matches!(self.command, Commands::Chat { speak: true, .. })
    }
}
