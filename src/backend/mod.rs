//! Chat backend abstraction for Chatling
//!
//! This module defines the ChatBackend trait that all backends must
//! implement, along with a factory for instantiating the configured
//! backend. The backend is the external collaborator that produces a
//! reply for one user message; designing it is out of scope here.

use crate::config::BackendConfig;
use crate::error::{ChatlingError, Result};
use async_trait::async_trait;

pub mod canned;
pub mod http;

pub use canned::CannedBackend;
pub use http::HttpBackend;

/// Backend trait for chat reply producers
///
/// A backend resolves exactly one reply for one user message. Failures
/// are reported as errors; the caller decides how they surface (Dispatch
/// converts them into placeholder messages and never re-raises).
///
/// # Examples
///
/// ```no_run
/// use chatling::backend::ChatBackend;
/// use chatling::error::Result;
/// use async_trait::async_trait;
///
/// struct EchoBackend;
///
/// #[async_trait]
/// impl ChatBackend for EchoBackend {
///     async fn reply(&self, _session_id: &str, message: &str) -> Result<String> {
///         Ok(message.to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Produce one reply for one user message
    ///
    /// # Arguments
    ///
    /// * `session_id` - The session the message belongs to
    /// * `message` - Trimmed, non-empty user message text
    ///
    /// # Returns
    ///
    /// The reply text; an empty string means the backend answered with
    /// no usable reply and the caller substitutes its fallback
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-success status
    async fn reply(&self, session_id: &str, message: &str) -> Result<String>;
}

impl std::fmt::Debug for dyn ChatBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ChatBackend")
    }
}

/// Create a backend from configuration
///
/// # Arguments
///
/// * `config` - Backend configuration naming the type and its settings
///
/// # Errors
///
/// Returns error for an unknown backend type or failed client setup
///
/// # Examples
///
/// ```
/// use chatling::backend::create_backend;
/// use chatling::config::BackendConfig;
///
/// let backend = create_backend(&BackendConfig::default());
/// assert!(backend.is_ok());
/// ```
pub fn create_backend(config: &BackendConfig) -> Result<Box<dyn ChatBackend>> {
    match config.backend_type.as_str() {
        "http" => {
            let backend = HttpBackend::new(config.http.clone())?;
            Ok(Box::new(backend))
        }
        "canned" => Ok(Box::new(CannedBackend::new(config.canned.clone()))),
        other => {
            Err(ChatlingError::Backend(format!("Unknown backend type: {}", other)).into())
        }
    }
}
