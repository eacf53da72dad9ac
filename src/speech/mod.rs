//! Optional speech capabilities
//!
//! This module abstracts the host-provided speech facilities behind
//! injected capability traits, so the rest of the client never touches
//! host globals directly. Each capability has an available and an
//! unavailable variant; the client checks availability once and degrades
//! gracefully when a capability is missing.

use crate::error::{ChatlingError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

pub mod command;
pub use command::{CommandRecognizer, CommandSynthesizer};

/// Speech-to-text capability
///
/// A single non-continuous recognition pass: the first final transcript
/// is returned and the capability goes back to idle. The transcript is
/// meant for the pending-input slot; it is never auto-dispatched.
#[async_trait]
pub trait SpeechInput: Send + Sync {
    /// Whether the host provides this capability
    fn is_available(&self) -> bool;

    /// Run one recognition pass and return the transcript
    ///
    /// # Arguments
    ///
    /// * `language` - Language tag for the recognizer
    ///
    /// # Errors
    ///
    /// Returns `ChatlingError::SpeechUnavailable` when the host lacks the
    /// capability, `ChatlingError::CaptureBusy` when a pass is already
    /// active, and `ChatlingError::Speech` on recognition failure
    async fn capture(&self, language: &str) -> Result<String>;
}

/// Text-to-speech capability
///
/// Fire-and-forget: no completion callback is consumed and there is no
/// queue, so overlapping calls may produce overlapping audio.
pub trait SpeechOutput: Send + Sync {
    /// Whether the host provides this capability
    fn is_available(&self) -> bool;

    /// Speak the given text aloud
    ///
    /// # Arguments
    ///
    /// * `text` - Text to synthesize
    /// * `language` - Language tag for the synthesizer
    fn speak(&self, text: &str, language: &str);
}

/// Unavailable variant for both capabilities
///
/// Used when the host has no speech support configured. Capture fails
/// immediately with a user-facing notice; speaking is a no-op.
#[derive(Debug, Default)]
pub struct UnavailableSpeech;

#[async_trait]
impl SpeechInput for UnavailableSpeech {
    fn is_available(&self) -> bool {
        false
    }

    async fn capture(&self, _language: &str) -> Result<String> {
        Err(ChatlingError::SpeechUnavailable(
            "Speech recognition is not supported on this host".to_string(),
        )
        .into())
    }
}

impl SpeechOutput for UnavailableSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&self, _text: &str, _language: &str) {}
}

/// Single-flight guard for capture passes
///
/// Only one recognition pass may be active at a time. The guard is an
/// explicit Idle/Capturing latch: `begin` flips Idle to Capturing and
/// fails when already capturing; dropping the token returns to Idle on
/// every exit path (success, silence, or error).
#[derive(Debug, Default)]
pub struct CaptureGuard {
    capturing: AtomicBool,
}

impl CaptureGuard {
    /// Creates a guard in the Idle state
    pub fn new() -> Self {
        Self {
            capturing: AtomicBool::new(false),
        }
    }

    /// Attempts to begin a capture pass
    ///
    /// # Errors
    ///
    /// Returns `ChatlingError::CaptureBusy` if a pass is already active
    pub fn begin(&self) -> Result<CaptureToken<'_>> {
        if self
            .capturing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ChatlingError::CaptureBusy.into());
        }
        Ok(CaptureToken { guard: self })
    }

    /// Whether a capture pass is currently active
    pub fn is_capturing(&self) -> bool {
        self.capturing.load(Ordering::Acquire)
    }
}

/// Token representing an active capture pass; returns the guard to Idle
/// when dropped
#[derive(Debug)]
pub struct CaptureToken<'a> {
    guard: &'a CaptureGuard,
}

impl Drop for CaptureToken<'_> {
    fn drop(&mut self) {
        self.guard.capturing.store(false, Ordering::Release);
    }
}
