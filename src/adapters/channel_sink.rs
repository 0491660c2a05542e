//! Render sink backed by the app message channel.
//!
//! The reply is assembled inside a spawned task, but widget state is only
//! mutated on the UI loop. This sink bridges the two by sending each
//! snapshot as an [`AppMessage::ReplyRendered`].

use tokio::sync::mpsc;

use crate::app::AppMessage;
use crate::traits::RenderSink;

/// Forwards every accumulated reply snapshot to the UI loop.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<AppMessage>,
    request_id: String,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<AppMessage>, request_id: impl Into<String>) -> Self {
        Self {
            tx,
            request_id: request_id.into(),
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

impl RenderSink for ChannelSink {
    fn render(&mut self, full_text: &str) {
        // A closed channel means the UI is shutting down
        let _ = self.tx.send(AppMessage::ReplyRendered {
            request_id: self.request_id.clone(),
            text: full_text.to_string(),
        });
    }
}
