//! Common test utilities for integration tests.
//!
//! Frame builders, chunk splitters and app fixtures shared by the test files.

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

use std::sync::Arc;

use chat_panel::app::App;
use chat_panel::client::ChatClient;

pub const TEST_BASE: &str = "http://test";
#[allow(dead_code)]
pub const STREAM_URL: &str = "http://test/api/v1/chatbot/chat/stream";
#[allow(dead_code)]
pub const MESSAGES_URL: &str = "http://test/api/v1/chatbot/messages";

/// One `data:` frame carrying `content`, delimiter included.
pub fn data_frame(content: &str) -> String {
    format!(
        "data: {}\n\n",
        serde_json::json!({ "content": content, "done": false })
    )
}

/// A well-formed body: the given deltas, a keepalive, then the done frame.
#[allow(dead_code)]
pub fn reply_body(deltas: &[&str]) -> String {
    let mut body = String::new();
    for (i, delta) in deltas.iter().enumerate() {
        body.push_str(&data_frame(delta));
        if i == 0 {
            body.push_str(": keepalive\n\n");
        }
    }
    body.push_str("data: {\"content\":\"\",\"done\":true}\n\n");
    body
}

/// Split `bytes` at the given sorted offsets.
#[allow(dead_code)]
pub fn split_at_offsets(bytes: &[u8], offsets: &[usize]) -> Vec<Vec<u8>> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for &offset in offsets {
        chunks.push(bytes[start..offset].to_vec());
        start = offset;
    }
    chunks.push(bytes[start..].to_vec());
    chunks
}

/// An app wired to a mock backend at [`TEST_BASE`].
#[allow(dead_code)]
pub fn test_app(mock: &MockHttpClient) -> App {
    App::new(ChatClient::new(Arc::new(mock.clone()), TEST_BASE))
}

/// Apply app messages until no request is in flight.
#[allow(dead_code)]
pub async fn drain_request(app: &mut App) {
    let mut rx = app.message_rx.take().expect("receiver present");
    while app.state.is_busy() {
        let msg = rx.recv().await.expect("channel open");
        app.handle_message(msg);
    }
    app.message_rx = Some(rx);
}

/// Apply exactly one app message.
#[allow(dead_code)]
pub async fn apply_next_message(app: &mut App) {
    let mut rx = app.message_rx.take().expect("receiver present");
    let msg = rx.recv().await.expect("channel open");
    app.handle_message(msg);
    app.message_rx = Some(rx);
}
