//! Message dispatch
//!
//! Dispatch sends one user message to the configured backend and resolves
//! exactly one outcome: the reply text, a fixed fallback when the reply is
//! absent or empty, or a fixed error placeholder on transport failure.
//! Failures are logged for diagnostics and never raised past this
//! boundary; every failure degrades to a visible chat message rather than
//! aborting the session.

use crate::backend::ChatBackend;
use crate::config::LogConfig;
use crate::session::{Message, MessageLog, Session};
use crate::speech::SpeechOutput;
use std::sync::Arc;

/// Fallback reply when the endpoint answers without a usable reply field
pub const FALLBACK_REPLY: &str = "No response received";

/// Placeholder reply when the endpoint cannot be reached
pub const ERROR_REPLY: &str = "Error connecting to the server.";

/// Owns the session, the message log, and the act of sending
///
/// The dispatcher appends the user message synchronously for immediate
/// feedback, performs a single request to the backend, and appends
/// exactly one bot message per accepted input. There is no retry, no
/// backoff, and no deduplication of rapid repeated sends; each call is
/// independent and at-most-once from the client's perspective.
pub struct Dispatcher {
    session: Session,
    log: MessageLog,
    backend: Arc<dyn ChatBackend>,
    speech_output: Option<(Arc<dyn SpeechOutput>, String)>,
}

impl Dispatcher {
    /// Creates a dispatcher with a fresh session
    ///
    /// # Arguments
    ///
    /// * `backend` - The reply-producing backend
    /// * `log_config` - Message log settings (capacity cap)
    ///
    /// # Examples
    ///
    /// ```
    /// use chatling::backend::CannedBackend;
    /// use chatling::config::LogConfig;
    /// use chatling::Dispatcher;
    /// use std::sync::Arc;
    ///
    /// let dispatcher = Dispatcher::new(Arc::new(CannedBackend::default()), &LogConfig::default());
    /// assert!(dispatcher.log().is_empty());
    /// ```
    pub fn new(backend: Arc<dyn ChatBackend>, log_config: &LogConfig) -> Self {
        Self {
            session: Session::new(),
            log: MessageLog::with_cap(log_config.cap),
            backend,
            speech_output: None,
        }
    }

    /// Enables spoken replies with the given capability and language tag
    ///
    /// # Arguments
    ///
    /// * `output` - Speech output capability
    /// * `language` - Language tag passed to the synthesizer
    pub fn with_speech_output(mut self, output: Arc<dyn SpeechOutput>, language: impl Into<String>) -> Self {
        self.speech_output = Some((output, language.into()));
        self
    }

    /// Updates the language tag used for spoken replies
    pub fn set_language(&mut self, language: impl Into<String>) {
        if let Some((_, lang)) = &mut self.speech_output {
            *lang = language.into();
        }
    }

    /// Seeds the log with a bot greeting at mount
    ///
    /// # Arguments
    ///
    /// * `text` - Greeting text
    pub fn seed_greeting(&mut self, text: impl Into<String>) {
        self.log.append(Message::bot(text));
    }

    /// Sends one user message and integrates exactly one reply
    ///
    /// Empty or whitespace-only input is rejected silently: nothing is
    /// appended and no request is made. Otherwise the user message is
    /// appended immediately, the backend is called once, and a bot
    /// message is appended with the reply, the fallback string for an
    /// absent or empty reply, or the error placeholder on failure.
    ///
    /// # Arguments
    ///
    /// * `text` - Raw user input; trimmed before dispatch
    ///
    /// # Returns
    ///
    /// The appended bot message, or `None` when the input was rejected
    pub async fn send(&mut self, text: &str) -> Option<&Message> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("Ignoring empty input");
            return None;
        }

        self.log.append(Message::user(trimmed));

        let reply_text = match self.backend.reply(&self.session.id, trimmed).await {
            Ok(reply) if reply.is_empty() => {
                tracing::debug!("Endpoint reply was empty, using fallback");
                FALLBACK_REPLY.to_string()
            }
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Dispatch failed for session {}: {}", self.session.id, e);
                ERROR_REPLY.to_string()
            }
        };

        self.log.append(Message::bot(reply_text));

        let bot_message = self.log.last();
        if let (Some(message), Some((output, language))) = (bot_message, &self.speech_output) {
            if output.is_available() {
                output.speak(&message.text, language);
            }
        }

        self.log.last()
    }

    /// Returns the session identity
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the message log
    pub fn log(&self) -> &MessageLog {
        &self.log
    }
}
