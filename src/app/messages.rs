//! AppMessage enum for async communication within the application.

use crate::models::ServerMessage;

/// Messages sent from spawned network tasks back to the UI loop.
///
/// Reply messages carry the request id they belong to.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// History fetched from the backend
    HistoryLoaded { messages: Vec<ServerMessage> },
    /// History could not be fetched
    HistoryLoadFailed { error: String },
    /// The chat request succeeded and the reply is about to stream
    ReplyStarted { request_id: String },
    /// Accumulated reply text so far
    ReplyRendered { request_id: String, text: String },
    /// The reply stream ended (normally or on a read error)
    ReplyFinished { request_id: String, text: String },
    /// The chat request failed before streaming
    RequestFailed { request_id: String, error: String },
    /// Server-side clear finished; the local reset already happened
    HistoryCleared { server_cleared: bool },
}
