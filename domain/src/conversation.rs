//! Append-only conversation log and submission state.

use crate::answer::Source;
use serde::{Deserialize, Serialize};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    User,
    Agent,
}

/// One entry in the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub text: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            text: text.into(),
            sources: Vec::new(),
        }
    }

    pub fn agent(text: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            role: MessageRole::Agent,
            text: text.into(),
            sources,
        }
    }
}

/// The append-only message log backing the conversation view.
///
/// This is the only state shared across submissions; entries are never
/// edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    pub fn push_agent(&mut self, text: impl Into<String>, sources: Vec<Source>) {
        self.messages.push(Message::agent(text, sources));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Transient state of one submission lifecycle; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Errored,
}

impl RequestState {
    /// Check whether a submission is currently being processed.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }
}
