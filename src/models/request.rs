use serde::{Deserialize, Serialize};

use super::message::{Role, ServerMessage};

/// One entry of the `messages` array sent to the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestMessage {
    pub role: Role,
    pub content: String,
}

/// Request body for `POST /chat/stream`.
///
/// Only the new user turn is sent; the backend keeps the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<RequestMessage>,
}

impl ChatRequest {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            messages: vec![RequestMessage {
                role: Role::User,
                content: text.into(),
            }],
        }
    }
}

/// Response body of `GET /messages`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryResponse {
    #[serde(default)]
    pub messages: Vec<ServerMessage>,
}
