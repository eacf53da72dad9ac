//! Host-command realization of the speech capabilities
//!
//! The CLI host provides speech through external programs configured in
//! `SpeechConfig`: a recognizer that prints one final transcript to
//! stdout, and a synthesizer that speaks its arguments. An unset command
//! means the capability is unavailable.

use crate::error::{ChatlingError, Result};
use crate::speech::{CaptureGuard, SpeechInput, SpeechOutput};
use async_trait::async_trait;
use tokio::process::Command;

/// Speech recognizer backed by an external command
///
/// The command is spawned with the language tag as its final argument
/// and must print the transcript to stdout. Only one pass may run at a
/// time; a second start while active returns a busy error.
pub struct CommandRecognizer {
    program: String,
    guard: CaptureGuard,
}

impl CommandRecognizer {
    /// Create a recognizer for the given program
    ///
    /// # Arguments
    ///
    /// * `program` - Executable spawned for each recognition pass
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            guard: CaptureGuard::new(),
        }
    }

    /// Whether a recognition pass is currently active
    pub fn is_capturing(&self) -> bool {
        self.guard.is_capturing()
    }
}

#[async_trait]
impl SpeechInput for CommandRecognizer {
    fn is_available(&self) -> bool {
        true
    }

    async fn capture(&self, language: &str) -> Result<String> {
        let _token = self.guard.begin()?;

        tracing::debug!("Starting recognition pass: {} {}", self.program, language);

        let output = Command::new(&self.program)
            .arg(language)
            .output()
            .await
            .map_err(|e| {
                ChatlingError::Speech(format!(
                    "Failed to run recognizer '{}': {}",
                    self.program, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ChatlingError::Speech(format!(
                "Recognizer exited with {}: {}",
                output.status,
                stderr.trim()
            ))
            .into());
        }

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::debug!("Recognition pass finished: {} chars", transcript.len());
        Ok(transcript)
    }
}

/// Speech synthesizer backed by an external command
///
/// Spawned with the language tag and the text as arguments. The child is
/// not awaited: output rendering is fire-and-forget, so overlapping
/// calls may produce overlapping audio.
pub struct CommandSynthesizer {
    program: String,
}

impl CommandSynthesizer {
    /// Create a synthesizer for the given program
    ///
    /// # Arguments
    ///
    /// * `program` - Executable spawned for each utterance
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl SpeechOutput for CommandSynthesizer {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&self, text: &str, language: &str) {
        let result = Command::new(&self.program)
            .arg(language)
            .arg(text)
            .spawn();

        match result {
            Ok(_child) => {
                tracing::debug!("Speaking {} chars via {}", text.len(), self.program);
            }
            Err(e) => {
                tracing::warn!("Failed to run synthesizer '{}': {}", self.program, e);
            }
        }
    }
}
