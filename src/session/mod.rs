//! Session identity and message types
//!
//! This module defines the per-mount session identity and the message
//! structure exchanged between the user and the bot. A session is created
//! exactly once when the client mounts and is immutable afterwards; a new
//! mount always produces a brand-new session with no continuity from any
//! previous one.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod log;
pub use log::MessageLog;

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The local user typed (or spoke) the message
    User,
    /// The remote bot replied, or the client synthesized a placeholder
    Bot,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Bot => write!(f, "bot"),
        }
    }
}

/// A single exchanged message
///
/// Messages are created by the local user action or by the remote reply
/// and are never mutated after creation. The timestamp is a
/// display-formatted local time string, matching what a chat transcript
/// shows next to each bubble.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message text
    pub text: String,
    /// Who sent the message
    pub sender: Sender,
    /// Display-formatted local time of creation
    pub timestamp: String,
}

impl Message {
    /// Creates a new user message stamped with the current local time
    ///
    /// # Arguments
    ///
    /// * `text` - The message content
    ///
    /// # Examples
    ///
    /// ```
    /// use chatling::session::{Message, Sender};
    ///
    /// let msg = Message::user("Hello!");
    /// assert_eq!(msg.sender, Sender::User);
    /// assert_eq!(msg.text, "Hello!");
    /// ```
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp: display_time(),
        }
    }

    /// Creates a new bot message stamped with the current local time
    ///
    /// # Arguments
    ///
    /// * `text` - The message content
    ///
    /// # Examples
    ///
    /// ```
    /// use chatling::session::{Message, Sender};
    ///
    /// let msg = Message::bot("Hi there");
    /// assert_eq!(msg.sender, Sender::Bot);
    /// ```
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            timestamp: display_time(),
        }
    }
}

/// Formats the current local time for message display
fn display_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// The scoped identity correlating a user's messages across one mount
///
/// The identifier is a 128-bit random token rendered as text. Generation
/// never blocks and has no error path. Sessions are destroyed with the
/// process; reloads create a brand-new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque unique token for this session
    pub id: String,
    /// When the session was created
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a fresh session identity
    ///
    /// # Examples
    ///
    /// ```
    /// use chatling::session::Session;
    ///
    /// let a = Session::new();
    /// let b = Session::new();
    /// assert_ne!(a.id, b.id);
    /// ```
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        };
        tracing::debug!("Created session {}", session.id);
        session
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_distinct() {
        let a = Session::new();
        let b = Session::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_session_id_is_uuid() {
        let session = Session::new();
        assert!(Uuid::parse_str(&session.id).is_ok());
    }

    #[test]
    fn test_user_message() {
        let msg = Message::user("Hello");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "Hello");
        assert!(!msg.timestamp.is_empty());
    }

    #[test]
    fn test_bot_message() {
        let msg = Message::bot("Hi there");
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.text, "Hi there");
    }

    #[test]
    fn test_sender_display() {
        assert_eq!(Sender::User.to_string(), "user");
        assert_eq!(Sender::Bot.to_string(), "bot");
    }

    #[test]
    fn test_sender_serde_lowercase() {
        let json = serde_json::to_string(&Sender::Bot).unwrap();
        assert_eq!(json, "\"bot\"");
        let back: Sender = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(back, Sender::User);
    }

    #[test]
    fn test_display_time_format() {
        // HH:MM:SS
        let ts = display_time();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.matches(':').count(), 2);
    }
}
