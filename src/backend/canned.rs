//! Canned reply backend
//!
//! Fabricates a fixed reply locally instead of calling a remote
//! endpoint: a configurable reply text delivered after an artificial
//! delay, with no network involved. Useful offline and in demos.

use crate::backend::ChatBackend;
use crate::config::CannedConfig;
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Locally fabricated reply backend
///
/// # Examples
///
/// ```
/// use chatling::backend::{CannedBackend, ChatBackend};
///
/// # tokio_test::block_on(async {
/// let backend = CannedBackend::default();
/// let reply = backend.reply("session-1", "anything").await.unwrap();
/// assert_eq!(reply, "This is a sample bot reply.");
/// # });
/// ```
pub struct CannedBackend {
    config: CannedConfig,
}

impl CannedBackend {
    /// Create a new canned backend instance
    ///
    /// # Arguments
    ///
    /// * `config` - Reply text and artificial delay
    pub fn new(config: CannedConfig) -> Self {
        tracing::info!("Initialized canned backend: delay={}ms", config.delay_ms);
        Self { config }
    }
}

impl Default for CannedBackend {
    fn default() -> Self {
        Self::new(CannedConfig {
            delay_ms: 0,
            ..CannedConfig::default()
        })
    }
}

#[async_trait]
impl ChatBackend for CannedBackend {
    async fn reply(&self, _session_id: &str, _message: &str) -> Result<String> {
        if self.config.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
        }
        Ok(self.config.reply.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_reply_text() {
        let backend = CannedBackend::new(CannedConfig {
            reply: "Canned!".to_string(),
            delay_ms: 0,
        });
        let reply = backend.reply("s", "m").await.unwrap();
        assert_eq!(reply, "Canned!");
    }

    #[tokio::test]
    async fn test_canned_reply_ignores_input() {
        let backend = CannedBackend::default();
        let a = backend.reply("s1", "first").await.unwrap();
        let b = backend.reply("s2", "second").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_canned_reply_with_delay() {
        let backend = CannedBackend::new(CannedConfig {
            reply: "slow".to_string(),
            delay_ms: 10,
        });
        let start = std::time::Instant::now();
        backend.reply("s", "m").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
