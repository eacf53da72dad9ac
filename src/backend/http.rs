//! HTTP chat endpoint backend
//!
//! This module implements the ChatBackend trait against the remote chat
//! endpoint: a single POST carrying the session id and message text, and
//! a JSON response expected to contain a `response` string field. Any
//! other response shape is tolerated by returning an empty reply, which
//! the dispatcher turns into its fallback string.

use crate::backend::ChatBackend;
use crate::config::HttpConfig;
use crate::error::{ChatlingError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Remote chat endpoint backend
///
/// # Examples
///
/// ```no_run
/// use chatling::backend::{ChatBackend, HttpBackend};
/// use chatling::config::HttpConfig;
///
/// # async fn example() -> chatling::error::Result<()> {
/// let config = HttpConfig {
///     base_url: "http://localhost:8080/chat".to_string(),
///     timeout_seconds: 30,
/// };
/// let backend = HttpBackend::new(config)?;
/// let reply = backend.reply("session-1", "Hello!").await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpBackend {
    client: Client,
    config: HttpConfig,
}

/// Request body sent to the chat endpoint
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    session_id: &'a str,
    message: &'a str,
}

/// Response body expected from the chat endpoint
///
/// The `response` field is optional so that unexpected shapes degrade to
/// an empty reply instead of a parse failure.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    response: Option<String>,
}

impl HttpBackend {
    /// Create a new HTTP backend instance
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint configuration containing base URL and timeout
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    ///
    /// # Examples
    ///
    /// ```
    /// use chatling::backend::HttpBackend;
    /// use chatling::config::HttpConfig;
    ///
    /// let backend = HttpBackend::new(HttpConfig::default());
    /// assert!(backend.is_ok());
    /// ```
    pub fn new(config: HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("chatling/0.2.0")
            .build()
            .map_err(|e| {
                ChatlingError::Backend(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::info!("Initialized HTTP backend: endpoint={}", config.base_url);

        Ok(Self { client, config })
    }

    /// Get the configured endpoint base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn reply(&self, session_id: &str, message: &str) -> Result<String> {
        let request = ChatRequest {
            session_id,
            message,
        };

        tracing::debug!(
            "Dispatching message to {} for session {}",
            self.config.base_url,
            session_id
        );

        let response = self
            .client
            .post(&self.config.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Chat endpoint request failed: {}", e);
                ChatlingError::Backend(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!("Chat endpoint returned error {}: {}", status, error_text);
            return Err(ChatlingError::Backend(format!(
                "Endpoint returned error {}: {}",
                status, error_text
            ))
            .into());
        }

        // Tolerate unexpected shapes: a body that is not the documented
        // object degrades to an empty reply rather than an error.
        let chat_response: ChatResponse = response.json().await.unwrap_or(ChatResponse {
            response: None,
        });

        Ok(chat_response.response.unwrap_or_default())
    }
}
