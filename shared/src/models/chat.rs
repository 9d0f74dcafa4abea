//! Scripted assistant chat

use serde::{Deserialize, Serialize};

/// Who wrote a chat line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatAuthor {
    User,
    Assistant,
}

impl ChatAuthor {
    /// Name shown above the message bubble
    pub fn display_name(&self) -> &'static str {
        match self {
            ChatAuthor::User => "Você",
            ChatAuthor::Assistant => "IA",
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, ChatAuthor::User)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: ChatAuthor,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            author: ChatAuthor::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            author: ChatAuthor::Assistant,
            text: text.into(),
        }
    }
}

/// Canned assistant reply; the user's text is quoted verbatim
pub fn assistant_reply(message: &str) -> String {
    format!("Simulação de resposta para: '{}'", message)
}

/// Append-only conversation log of one session
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the user's message and the scripted reply
    ///
    /// Blank submissions are ignored. Returns the number of appended entries
    /// (0 or 2).
    pub fn submit(&mut self, message: &str) -> usize {
        if message.trim().is_empty() {
            return 0;
        }

        self.messages.push(ChatMessage::user(message));
        self.messages.push(ChatMessage::assistant(assistant_reply(message)));
        2
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
