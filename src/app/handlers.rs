//! Widget handlers and message handling for the App.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::Instrument;
use uuid::Uuid;

use crate::adapters::ChannelSink;
use crate::client::ChatClient;
use crate::stream::assemble_reply;

use super::{App, AppMessage};

/// Shown when the server-side clear failed; the panel was reset anyway.
pub const CLEAR_FAILED_NOTICE: &str = "History was cleared here but not on the server.";

impl App {
    /// Open or close the panel.
    pub fn toggle_panel(&mut self) {
        let open = self.state.toggle();
        tracing::debug!(open, "Panel toggled");
        self.mark_dirty();
    }

    /// Close the panel if it is open.
    pub fn minimize_panel(&mut self) {
        if self.state.is_open {
            self.toggle_panel();
        }
    }

    /// Fetch the stored conversation in the background.
    pub fn load_history(&mut self) {
        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let msg = match client.fetch_history().await {
                Ok(messages) => AppMessage::HistoryLoaded { messages },
                Err(e) => {
                    tracing::warn!(category = %e.category(), "Failed to load history: {}", e);
                    AppMessage::HistoryLoadFailed {
                        error: e.to_string(),
                    }
                }
            };
            let _ = message_tx.send(msg);
        });
    }

    /// Send a quick reply, or the trimmed input line when `quick_reply` is `None`.
    ///
    /// Returns false when nothing was sent: the text was empty or a request
    /// is already in flight.
    pub fn send_message(&mut self, quick_reply: Option<&str>) -> bool {
        if !self.state.input_enabled || self.state.is_busy() {
            tracing::debug!("Send refused while a request is in flight");
            return false;
        }

        let text = match quick_reply {
            Some(reply) if !reply.is_empty() => reply.to_string(),
            _ => self.state.input.value().trim().to_string(),
        };
        if text.is_empty() {
            return false;
        }

        let request_id = Uuid::new_v4().to_string();
        self.state.begin_request(request_id.clone(), &text);
        self.mark_dirty();

        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();
        let span = tracing::info_span!("chat_request", request_id = %request_id);
        tokio::spawn(stream_reply(client, message_tx, request_id, text).instrument(span));
        true
    }

    /// Clear the conversation on the server, then reset the panel.
    ///
    /// The panel resets even when the server-side clear fails.
    pub fn refresh_chat(&mut self) {
        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let server_cleared = match client.clear_history().await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(
                        hint = e.category().recovery_hint(),
                        "Failed to clear backend history: {}",
                        e
                    );
                    false
                }
            };
            let _ = message_tx.send(AppMessage::HistoryCleared { server_cleared });
        });
    }

    /// Apply a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::HistoryLoaded { messages } => {
                let shown = self.state.apply_history(messages);
                tracing::info!(shown, "History loaded");
            }
            AppMessage::HistoryLoadFailed { error } => {
                tracing::debug!(%error, "Starting with an empty conversation");
                self.state.reset_conversation();
            }
            AppMessage::ReplyStarted { request_id } => {
                self.state.begin_reply(&request_id);
            }
            AppMessage::ReplyRendered { request_id, text } => {
                self.state.render_reply(&request_id, &text);
            }
            AppMessage::ReplyFinished { request_id, text } => {
                self.state.finish_reply(&request_id, &text);
            }
            AppMessage::RequestFailed { request_id, error } => {
                tracing::debug!(%request_id, %error, "Showing fallback reply");
                self.state.fail_request(&request_id);
            }
            AppMessage::HistoryCleared { server_cleared } => {
                self.state.reset_conversation();
                self.state.notice = if server_cleared {
                    None
                } else {
                    Some(CLEAR_FAILED_NOTICE.to_string())
                };
            }
        }
    }
}

/// Issue one chat request and stream its reply back as [`AppMessage`]s.
///
/// Sends `ReplyStarted`, then one `ReplyRendered` per delta, then
/// `ReplyFinished`; or a single `RequestFailed` when the request could not
/// be made.
pub async fn stream_reply(
    client: Arc<ChatClient>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    request_id: String,
    text: String,
) {
    tracing::info!("Sending chat request");

    match client.stream_chat(&text).await {
        Ok(body) => {
            let _ = message_tx.send(AppMessage::ReplyStarted {
                request_id: request_id.clone(),
            });

            let mut sink = ChannelSink::new(message_tx.clone(), request_id.clone());
            let reply = assemble_reply(body, &mut sink).await;

            tracing::info!(chars = reply.chars().count(), "Reply complete");
            let _ = message_tx.send(AppMessage::ReplyFinished {
                request_id,
                text: reply,
            });
        }
        Err(e) => {
            let category = e.category();
            tracing::error!(
                %category,
                retryable = category.is_retryable(),
                hint = category.recovery_hint(),
                "Chat request failed: {}",
                e
            );
            let _ = message_tx.send(AppMessage::RequestFailed {
                request_id,
                error: e.to_string(),
            });
        }
    }
}
