//! One-shot message dispatch
//!
//! Sends a single message through a fresh session and prints the
//! resolved reply. Useful for scripting and for smoke-testing an
//! endpoint without entering the interactive panel.

use crate::backend::create_backend;
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use std::sync::Arc;

/// Dispatch one message and print the bot reply to stdout
///
/// Empty input is a silent no-op, matching the interactive panel.
///
/// # Arguments
///
/// * `config` - Validated configuration
/// * `message` - The message to dispatch
///
/// # Errors
///
/// Returns an error only if the backend cannot be created; dispatch
/// failures degrade to the error placeholder reply.
pub async fn run_send(config: Config, message: &str) -> Result<()> {
    let backend = Arc::from(create_backend(&config.backend)?);
    let mut dispatcher = Dispatcher::new(backend, &config.log);

    tracing::debug!(
        "One-shot dispatch on session {}",
        dispatcher.session().id
    );

    if let Some(reply) = dispatcher.send(message).await {
        println!("{}", reply.text);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn canned_config() -> Config {
        let mut config = Config::default();
        config.backend.backend_type = "canned".to_string();
        config.backend.canned.delay_ms = 0;
        config
    }

    #[tokio::test]
    async fn test_run_send_succeeds_with_canned_backend() {
        assert!(run_send(canned_config(), "hello").await.is_ok());
    }

    #[tokio::test]
    async fn test_run_send_empty_message_is_ok() {
        assert!(run_send(canned_config(), "   ").await.is_ok());
    }
}
