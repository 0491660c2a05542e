use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Opening assistant message every conversation starts with.
pub const GREETING: &str =
    "Hi! I'm the Dilshaj Infotech AI Assistant. How can I help you today?";

/// Shown in place of a reply when the chat request could not be made.
pub const FALLBACK_REPLY: &str = "Sorry, I'm having trouble connecting right now.";

/// Role of a message in the panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Map a backend role string. Anything but `user`/`assistant` is not shown.
    pub fn from_server(role: &str) -> Option<Self> {
        match role {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A message as displayed in the panel
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Local time the message was added to the panel
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn greeting() -> Self {
        Self::assistant(GREETING)
    }

    /// Time of day in `HH:MM`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Message format from the server history endpoint.
///
/// The backend stores every turn of its agent, including system and tool
/// messages, so `role` stays a plain string here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl ServerMessage {
    /// Convert to a displayable message, or `None` when the panel hides it.
    pub fn into_chat_message(self) -> Option<ChatMessage> {
        let role = Role::from_server(&self.role)?;
        match self.content {
            Some(content) if !content.is_empty() => Some(ChatMessage::new(role, content)),
            _ => None,
        }
    }
}

/// Quick-reply suggestion shown under the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickReply {
    pub text: &'static str,
    /// The first suggestion is highlighted
    pub primary: bool,
}

/// Suggestions offered under the conversation, bound to F1..F4.
pub const QUICK_REPLIES: [QuickReply; 4] = [
    QuickReply {
        text: "About Company",
        primary: true,
    },
    QuickReply {
        text: "Our Services",
        primary: false,
    },
    QuickReply {
        text: "Placement Policy",
        primary: false,
    },
    QuickReply {
        text: "Contact Info",
        primary: false,
    },
];

/// Look up a quick reply by its zero-based slot.
pub fn quick_reply(index: usize) -> Option<&'static str> {
    QUICK_REPLIES.get(index).map(|q| q.text)
}
