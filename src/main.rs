//! Chatling - Conversation session client
//!
//! Entry point for the CLI. Parses arguments, loads and validates
//! configuration, initializes tracing, and dispatches to the command
//! handlers.

use chatling::cli::{Cli, Commands};
use chatling::commands;
use chatling::config::Config;
use chatling::error::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| "config/chatling.yaml".to_string());
    let config = Config::load(&config_path, &cli)?;
    config.validate()?;

    match &cli.command {
        Commands::Chat { .. } => commands::run_chat(config).await,
        Commands::Send { message, .. } => commands::run_send(config, message).await,
    }
}

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence; `--verbose` raises the default level to
/// debug for this crate only.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "chatling=debug"
    } else {
        "chatling=info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
