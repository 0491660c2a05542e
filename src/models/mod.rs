//! Data types shared by the client, the widget state and the UI.

mod message;
mod request;

pub use message::{
    quick_reply, ChatMessage, QuickReply, Role, ServerMessage, FALLBACK_REPLY, GREETING,
    QUICK_REPLIES,
};
pub use request::{ChatRequest, HistoryResponse, RequestMessage};
