//! Message log and the send-cycle state machine.
//!
//! DESIGN
//! ======
//! A send cycle runs `Idle -> Sending -> Idle`. Entering `Sending` appends
//! the user message and a pending placeholder tagged with a fresh id; the
//! cycle only ends when a resolution carrying that same id arrives. Sends
//! are serialized: `begin_send` refuses to start while a cycle is open.
//!
//! The placeholder is always the last entry while present. Messages added
//! during a cycle (the deferred welcome, for instance) go in front of it.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatError;

/// Author of a log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single rendered log entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    /// Local `HH:MM` at creation time.
    pub timestamp: String,
    /// `true` only for the "thinking" placeholder.
    pub pending: bool,
}

/// Where the widget is in its current send cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SendPhase {
    #[default]
    Idle,
    Sending { placeholder_id: String },
}

/// Handed to the caller when a cycle starts; identifies the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    pub placeholder_id: String,
    pub text: String,
}

/// Message log plus send phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub phase: SendPhase,
}

impl ChatState {
    pub fn is_sending(&self) -> bool {
        matches!(self.phase, SendPhase::Sending { .. })
    }

    /// The outstanding placeholder, if a cycle is open.
    pub fn placeholder(&self) -> Option<&ChatMessage> {
        self.messages.last().filter(|m| m.pending)
    }

    /// Append a settled message and return its id.
    pub fn add_message(&mut self, text: impl Into<String>, sender: Sender, timestamp: &str) -> String {
        let message = ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            sender,
            timestamp: timestamp.to_owned(),
            pending: false,
        };
        let id = message.id.clone();
        let at = if self.placeholder().is_some() {
            self.messages.len() - 1
        } else {
            self.messages.len()
        };
        self.messages.insert(at, message);
        id
    }

    /// Start a send cycle for the raw input.
    ///
    /// Returns `None` without touching the log when the trimmed input is
    /// empty or another cycle is still open.
    pub fn begin_send(&mut self, input: &str, thinking_text: &str, timestamp: &str) -> Option<PendingSend> {
        let text = input.trim();
        if text.is_empty() || self.is_sending() {
            return None;
        }

        self.add_message(text, Sender::User, timestamp);

        let placeholder_id = uuid::Uuid::new_v4().to_string();
        self.messages.push(ChatMessage {
            id: placeholder_id.clone(),
            text: thinking_text.to_owned(),
            sender: Sender::Bot,
            timestamp: timestamp.to_owned(),
            pending: true,
        });
        self.phase = SendPhase::Sending {
            placeholder_id: placeholder_id.clone(),
        };

        Some(PendingSend {
            placeholder_id,
            text: text.to_owned(),
        })
    }

    /// Close the cycle identified by `placeholder_id`.
    ///
    /// Removes the placeholder, then appends the reply or `fallback_text` on
    /// any error. Returns `false` and leaves the log untouched if the id does
    /// not match the open cycle.
    pub fn resolve(
        &mut self,
        placeholder_id: &str,
        reply: Result<String, ChatError>,
        fallback_text: &str,
        timestamp: &str,
    ) -> bool {
        match &self.phase {
            SendPhase::Sending { placeholder_id: open } if open == placeholder_id => {}
            _ => return false,
        }

        self.messages.retain(|m| !(m.pending && m.id == placeholder_id));
        self.phase = SendPhase::Idle;
        self.add_message(reply_text(reply, fallback_text), Sender::Bot, timestamp);
        true
    }
}

/// Collapse a chat outcome to the text shown to the user.
pub fn reply_text(reply: Result<String, ChatError>, fallback_text: &str) -> String {
    reply.unwrap_or_else(|_| fallback_text.to_owned())
}
