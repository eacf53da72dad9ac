//! Configuration management for Chatling
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files and CLI overrides.

use crate::cli::Cli;
use crate::error::{ChatlingError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Chatling
///
/// This structure holds all configuration needed for the client,
/// including backend settings, chat behavior, speech capabilities,
/// and the diagnostic session mirror.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Backend configuration (HTTP endpoint or canned replies)
    #[serde(default)]
    pub backend: BackendConfig,

    /// Chat behavior configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// Message log configuration
    #[serde(default)]
    pub log: LogConfig,

    /// Speech capability configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Diagnostic session mirror configuration
    #[serde(default)]
    pub mirror: MirrorConfig,
}

/// Backend configuration
///
/// Specifies which chat backend to use and its settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Type of backend to use ("http" or "canned")
    #[serde(rename = "type", default = "default_backend_type")]
    pub backend_type: String,

    /// HTTP endpoint configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Canned reply configuration
    #[serde(default)]
    pub canned: CannedConfig,
}

fn default_backend_type() -> String {
    "http".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            backend_type: default_backend_type(),
            http: HttpConfig::default(),
            canned: CannedConfig::default(),
        }
    }
}

/// HTTP chat endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Base URL of the remote chat endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/chat".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Canned reply backend configuration
///
/// The canned backend fabricates a fixed reply locally after a short
/// delay, useful offline and in demos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CannedConfig {
    /// The fixed reply text
    #[serde(default = "default_canned_reply")]
    pub reply: String,

    /// Artificial reply delay in milliseconds
    #[serde(default = "default_canned_delay_ms")]
    pub delay_ms: u64,
}

fn default_canned_reply() -> String {
    "This is a sample bot reply.".to_string()
}

fn default_canned_delay_ms() -> u64 {
    1000
}

impl Default for CannedConfig {
    fn default() -> Self {
        Self {
            reply: default_canned_reply(),
            delay_ms: default_canned_delay_ms(),
        }
    }
}

/// Chat behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Greeting seeded into the log when the panel mounts
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Language tag used for speech recognition and synthesis
    #[serde(default = "default_language")]
    pub language: String,

    /// Suggested-reply shortcuts offered in the panel
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,

    /// Speak bot replies aloud when speech output is available
    #[serde(default)]
    pub speak_replies: bool,
}

fn default_greeting() -> String {
    "Hello! How can I assist you?".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_suggestions() -> Vec<String> {
    vec![
        "How can I help you?".to_string(),
        "Tell me a joke".to_string(),
        "What's the weather like?".to_string(),
    ]
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            language: default_language(),
            suggestions: default_suggestions(),
            speak_replies: false,
        }
    }
}

/// Message log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Maximum messages retained in the log; 0 means unbounded
    #[serde(default = "default_log_cap")]
    pub cap: usize,
}

fn default_log_cap() -> usize {
    200
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            cap: default_log_cap(),
        }
    }
}

/// Speech capability configuration
///
/// The host realizes speech capabilities by spawning external commands.
/// An unset command means the corresponding capability is unavailable
/// and degrades gracefully.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpeechConfig {
    /// Command spawned for speech recognition; prints the transcript to
    /// stdout. The language tag is appended as the final argument.
    #[serde(default)]
    pub recognizer: Option<String>,

    /// Command spawned for speech synthesis; receives the language tag
    /// and the text to speak as arguments.
    #[serde(default)]
    pub synthesizer: Option<String>,
}

/// Diagnostic session mirror configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Whether to mirror the session id into the local store
    #[serde(default = "default_mirror_enabled")]
    pub enabled: bool,

    /// Explicit store path; when unset the user data directory is used
    #[serde(default)]
    pub path: Option<String>,
}

fn default_mirror_enabled() -> bool {
    true
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            enabled: default_mirror_enabled(),
            path: None,
        }
    }
}

/// Known language tags and their display names
///
/// # Examples
///
/// ```
/// use chatling::config::languages;
///
/// let names = languages();
/// assert_eq!(names.iter().find(|(tag, _)| *tag == "en").unwrap().1, "English");
/// ```
pub fn languages() -> &'static [(&'static str, &'static str)] {
    &[
        ("en", "English"),
        ("es", "Spanish"),
        ("hi", "Hindi"),
        ("fr", "French"),
    ]
}

impl Config {
    /// Load configuration from a YAML file with CLI overrides applied
    ///
    /// A missing file is not an error; defaults are used so the client
    /// works out of the box against a local endpoint.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - Parsed CLI arguments whose overrides take precedence
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load(path: impl AsRef<Path>, cli: &Cli) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&contents).map_err(ChatlingError::Yaml)?
        } else {
            tracing::debug!(
                "Configuration file {} not found, using defaults",
                path.display()
            );
            Self::default()
        };

        config.apply_cli_overrides(cli);
        Ok(config)
    }

    /// Apply CLI overrides on top of the loaded configuration
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(endpoint) = cli.endpoint_override() {
            self.backend.backend_type = "http".to_string();
            self.backend.http.base_url = endpoint.to_string();
        }
        if cli.wants_canned() {
            self.backend.backend_type = "canned".to_string();
        }
        if let Some(language) = cli.language_override() {
            self.chat.language = language.to_string();
        }
        if cli.wants_speech_output() {
            self.chat.speak_replies = true;
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the backend type is unknown, the endpoint URL
    /// is malformed, or the language tag is empty
    pub fn validate(&self) -> Result<()> {
        match self.backend.backend_type.as_str() {
            "http" => {
                let parsed = url::Url::parse(&self.backend.http.base_url).map_err(|e| {
                    ChatlingError::Config(format!(
                        "Invalid endpoint URL '{}': {}",
                        self.backend.http.base_url, e
                    ))
                })?;
                if parsed.scheme() != "http" && parsed.scheme() != "https" {
                    return Err(ChatlingError::Config(format!(
                        "Endpoint URL must be http or https, got '{}'",
                        parsed.scheme()
                    ))
                    .into());
                }
                if self.backend.http.timeout_seconds == 0 {
                    return Err(
                        ChatlingError::Config("timeout_seconds must be positive".into()).into(),
                    );
                }
            }
            "canned" => {}
            other => {
                return Err(ChatlingError::Config(format!(
                    "Unknown backend type: {} (expected 'http' or 'canned')",
                    other
                ))
                .into());
            }
        }

        if self.chat.language.trim().is_empty() {
            return Err(ChatlingError::Config("Language tag must not be empty".into()).into());
        }

        Ok(())
    }
}
