//! Widget state.
//!
//! [`WidgetState`] holds everything the panel shows: the open flag, the
//! conversation, the input line and the in-flight request. Handlers in
//! [`crate::app`] mutate it; the UI only reads it.
//!
//! A request moves through these steps, each keyed by its request id so a
//! late message from an abandoned request cannot touch a newer one:
//!
//! ```text
//! begin_request ──► begin_reply ──► render_reply* ──► finish_reply
//!        └──────────► fail_request
//! ```

mod input;

pub use input::InputLine;

use chrono::{Local, NaiveDate};

use crate::models::{ChatMessage, ServerMessage, FALLBACK_REPLY};

/// Identifier of one send, used to match async results to state.
pub type RequestId = String;

#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlight {
    id: RequestId,
    /// Index of the assistant placeholder once streaming began
    reply_index: Option<usize>,
}

/// Explicit state of the chat panel.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Panel visible (otherwise only the launcher is drawn)
    pub is_open: bool,
    /// Conversation, always starting with the greeting
    pub messages: Vec<ChatMessage>,
    pub input: InputLine,
    /// False while a request is in flight
    pub input_enabled: bool,
    /// Typing indicator shown until the reply starts streaming
    pub loading: bool,
    /// Transient status line (e.g. a failed history clear)
    pub notice: Option<String>,
    /// Date shown in the separator above the conversation
    pub session_date: NaiveDate,
    /// Lines scrolled up from the newest message; 0 follows the conversation
    pub scroll_offset: u16,
    in_flight: Option<InFlight>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetState {
    pub fn new() -> Self {
        Self {
            is_open: false,
            messages: vec![ChatMessage::greeting()],
            input: InputLine::new(),
            input_enabled: true,
            loading: false,
            notice: None,
            session_date: Local::now().date_naive(),
            scroll_offset: 0,
            in_flight: None,
        }
    }

    /// Flip the panel open or closed. Returns the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    /// Forget the conversation and show only the greeting.
    ///
    /// An in-flight request keeps the input disabled until it completes, but
    /// its reply no longer lands in the conversation.
    pub fn reset_conversation(&mut self) {
        self.messages = vec![ChatMessage::greeting()];
        self.loading = false;
        self.session_date = Local::now().date_naive();
        self.scroll_offset = 0;
        if let Some(in_flight) = self.in_flight.as_mut() {
            in_flight.reply_index = None;
        }
    }

    /// Replace the conversation with the stored history.
    ///
    /// Only `user` and `assistant` messages with content are kept. Returns
    /// the number of messages shown after the greeting.
    pub fn apply_history(&mut self, history: Vec<ServerMessage>) -> usize {
        self.reset_conversation();
        self.messages
            .extend(history.into_iter().filter_map(ServerMessage::into_chat_message));
        self.messages.len() - 1
    }

    /// True while a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_id(&self) -> Option<&str> {
        self.in_flight.as_ref().map(|f| f.id.as_str())
    }

    fn is_current(&self, id: &str) -> bool {
        self.in_flight_id() == Some(id)
    }

    fn follow_newest(&mut self) {
        self.scroll_offset = 0;
    }

    /// Record the user's message and lock the input until the reply is done.
    pub fn begin_request(&mut self, id: RequestId, text: &str) {
        self.messages.push(ChatMessage::user(text));
        self.input.clear();
        self.input_enabled = false;
        self.loading = true;
        self.notice = None;
        self.in_flight = Some(InFlight {
            id,
            reply_index: None,
        });
        self.follow_newest();
    }

    /// The reply started streaming: swap the typing indicator for an empty
    /// assistant message.
    pub fn begin_reply(&mut self, id: &str) {
        if !self.is_current(id) {
            return;
        }
        self.loading = false;
        self.messages.push(ChatMessage::assistant(String::new()));
        let index = self.messages.len() - 1;
        if let Some(in_flight) = self.in_flight.as_mut() {
            in_flight.reply_index = Some(index);
        }
        self.follow_newest();
    }

    fn reply_index(&self, id: &str) -> Option<usize> {
        self.in_flight
            .as_ref()
            .filter(|f| f.id == id)
            .and_then(|f| f.reply_index)
    }

    /// Show the accumulated reply so far.
    pub fn render_reply(&mut self, id: &str, full_text: &str) {
        if let Some(index) = self.reply_index(id) {
            if let Some(message) = self.messages.get_mut(index) {
                message.content = full_text.to_string();
            }
            self.follow_newest();
        }
    }

    /// Commit the final reply (possibly empty) and unlock the input.
    pub fn finish_reply(&mut self, id: &str, full_text: &str) {
        if !self.is_current(id) {
            return;
        }
        self.render_reply(id, full_text);
        self.in_flight = None;
        self.loading = false;
        self.input_enabled = true;
    }

    /// The request failed before streaming: show the fallback reply.
    pub fn fail_request(&mut self, id: &str) {
        if !self.is_current(id) {
            return;
        }
        self.loading = false;
        self.messages.push(ChatMessage::assistant(FALLBACK_REPLY));
        self.in_flight = None;
        self.input_enabled = true;
        self.follow_newest();
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}
