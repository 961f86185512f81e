//! Toast-style messages shown under the current screen

use std::time::{Duration, Instant};

/// How long a message stays in the messages pane
pub const MESSAGE_LIFETIME: Duration = Duration::from_secs(8);

/// At most this many messages are kept
pub const MAX_MESSAGES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub message_type: MessageType,
    pub text: String,
    pub timestamp: Instant,
}

impl Message {
    pub fn new(message_type: MessageType, text: impl Into<String>) -> Self {
        Self {
            message_type,
            text: text.into(),
            timestamp: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.timestamp.elapsed() > MESSAGE_LIFETIME
    }

    pub fn icon(&self) -> &str {
        match self.message_type {
            MessageType::Info => "ℹ",
            MessageType::Success => "✓",
            MessageType::Warning => "⚠",
            MessageType::Error => "✗",
        }
    }
}

/// Append a message, dropping the oldest beyond `MAX_MESSAGES`
pub fn push(messages: &mut Vec<Message>, message: Message) {
    messages.push(message);
    if messages.len() > MAX_MESSAGES {
        let excess = messages.len() - MAX_MESSAGES;
        messages.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_latest() {
        let mut messages = Vec::new();
        for i in 0..6 {
            push(&mut messages, Message::new(MessageType::Info, format!("m{}", i)));
        }
        assert_eq!(messages.len(), MAX_MESSAGES);
        assert_eq!(messages[0].text, "m2");
        assert_eq!(messages[3].icon(), "ℹ");
        assert!(!messages[3].is_expired());
    }
}
