//! Append-only message log with optional capacity cap
//!
//! The log records every exchanged message for the current session, oldest
//! first. Messages are discrete appends performed by a single logical
//! thread of event handlers, so no interior locking is needed. Growth is
//! bounded by an optional cap; when the cap is reached the oldest messages
//! are evicted first.

use crate::session::{Message, Sender};

/// Ordered record of all exchanged messages for the current session
///
/// Insertion order is significant and stable: messages appear in exactly
/// the order they were appended, regardless of how long each dispatch
/// took. The log is owned exclusively by the session manager and lives
/// only as long as the session.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
    cap: Option<usize>,
}

impl MessageLog {
    /// Creates an empty log with no capacity cap
    ///
    /// # Examples
    ///
    /// ```
    /// use chatling::session::MessageLog;
    ///
    /// let log = MessageLog::new();
    /// assert!(log.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            cap: None,
        }
    }

    /// Creates an empty log that keeps at most `cap` messages
    ///
    /// When an append would exceed the cap, the oldest message is evicted.
    /// A cap of zero is treated as uncapped.
    ///
    /// # Arguments
    ///
    /// * `cap` - Maximum number of messages to retain
    ///
    /// # Examples
    ///
    /// ```
    /// use chatling::session::{Message, MessageLog};
    ///
    /// let mut log = MessageLog::with_cap(2);
    /// log.append(Message::user("one"));
    /// log.append(Message::bot("two"));
    /// log.append(Message::user("three"));
    /// assert_eq!(log.len(), 2);
    /// assert_eq!(log.messages()[0].text, "two");
    /// ```
    pub fn with_cap(cap: usize) -> Self {
        Self {
            messages: Vec::new(),
            cap: if cap == 0 { None } else { Some(cap) },
        }
    }

    /// Appends a message to the end of the log
    ///
    /// # Arguments
    ///
    /// * `message` - The message to append
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        if let Some(cap) = self.cap {
            if self.messages.len() > cap {
                let excess = self.messages.len() - cap;
                self.messages.drain(..excess);
                tracing::debug!("Evicted {} oldest message(s) at cap {}", excess, cap);
            }
        }
    }

    /// Returns all messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the most recent message, if any
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the number of messages in the log
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the log has no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Counts messages from the given sender
    ///
    /// # Arguments
    ///
    /// * `sender` - The sender to count messages for
    pub fn count_from(&self, sender: Sender) -> usize {
        self.messages.iter().filter(|m| m.sender == sender).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Message;

    #[test]
    fn test_new_log_is_empty() {
        let log = MessageLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut log = MessageLog::new();
        log.append(Message::user("first"));
        log.append(Message::bot("second"));
        log.append(Message::user("third"));

        let texts: Vec<&str> = log.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_last_returns_most_recent() {
        let mut log = MessageLog::new();
        log.append(Message::user("hello"));
        log.append(Message::bot("reply"));
        assert_eq!(log.last().unwrap().text, "reply");
    }

    #[test]
    fn test_cap_evicts_oldest_first() {
        let mut log = MessageLog::with_cap(3);
        for i in 0..5 {
            log.append(Message::user(format!("msg {}", i)));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.messages()[0].text, "msg 2");
        assert_eq!(log.messages()[2].text, "msg 4");
    }

    #[test]
    fn test_zero_cap_means_unbounded() {
        let mut log = MessageLog::with_cap(0);
        for i in 0..10 {
            log.append(Message::user(format!("msg {}", i)));
        }
        assert_eq!(log.len(), 10);
    }

    #[test]
    fn test_count_from() {
        let mut log = MessageLog::new();
        log.append(Message::user("a"));
        log.append(Message::bot("b"));
        log.append(Message::user("c"));
        assert_eq!(log.count_from(Sender::User), 2);
        assert_eq!(log.count_from(Sender::Bot), 1);
    }
}
