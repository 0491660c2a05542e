//! Application controller for the chat panel.
//!
//! [`App`] owns the [`WidgetState`] and the sender half of the message
//! channel. Handlers spawn network work as tokio tasks; results come back as
//! [`AppMessage`]s and are applied by [`App::handle_message`] on the UI loop,
//! which is the only place the state is mutated.

mod handlers;
mod keys;
mod messages;

pub use handlers::{stream_reply, CLEAR_FAILED_NOTICE};
pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::ChatClient;
use crate::state::WidgetState;

/// Main application state
pub struct App {
    /// Everything the panel displays
    pub state: WidgetState,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Receiver for async messages (taken by the run loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Chatbot API client (shared across async tasks)
    pub client: Arc<ChatClient>,
    /// Tick counter for animations (typing indicator)
    pub tick_count: u64,
    /// Set when visible state changed since the last draw
    pub needs_redraw: bool,
}

impl App {
    pub fn new(client: ChatClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: WidgetState::new(),
            should_quit: false,
            message_rx: Some(message_rx),
            message_tx,
            client: Arc::new(client),
            tick_count: 0,
            needs_redraw: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation clock. Only redraws while the typing indicator
    /// is animating.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.state.loading && self.tick_count % 20 == 0 {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
