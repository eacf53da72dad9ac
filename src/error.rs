//! Error types for Chatling
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Chatling operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, backend dispatch, speech capability use,
/// and session mirroring.
#[derive(Error, Debug)]
pub enum ChatlingError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backend-related errors (endpoint calls, bad responses, etc.)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Speech capability is not available on this host
    #[error("Speech capability unavailable: {0}")]
    SpeechUnavailable(String),

    /// A speech capture pass is already in progress
    #[error("A capture is already in progress")]
    CaptureBusy,

    /// Speech capability errors (recognition or synthesis failures)
    #[error("Speech error: {0}")]
    Speech(String),

    /// Session mirror errors (key/value store operations)
    #[error("Mirror error: {0}")]
    Mirror(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Chatling operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = ChatlingError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_backend_error_display() {
        let error = ChatlingError::Backend("endpoint timeout".to_string());
        assert_eq!(error.to_string(), "Backend error: endpoint timeout");
    }

    #[test]
    fn test_speech_unavailable_display() {
        let error = ChatlingError::SpeechUnavailable("no recognizer configured".to_string());
        assert_eq!(
            error.to_string(),
            "Speech capability unavailable: no recognizer configured"
        );
    }

    #[test]
    fn test_capture_busy_display() {
        let error = ChatlingError::CaptureBusy;
        assert_eq!(error.to_string(), "A capture is already in progress");
    }

    #[test]
    fn test_mirror_error_display() {
        let error = ChatlingError::Mirror("tree open failed".to_string());
        assert_eq!(error.to_string(), "Mirror error: tree open failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: ChatlingError = io_error.into();
        assert!(matches!(error, ChatlingError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: ChatlingError = json_error.into();
        assert!(matches!(error, ChatlingError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: ChatlingError = yaml_error.into();
        assert!(matches!(error, ChatlingError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChatlingError>();
    }
}
