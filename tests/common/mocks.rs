//! Mock configurations for test fixtures.
//!
//! Re-exports the mocks from `chat_panel::adapters::mock` and adds a builder
//! for the backend routes the panel uses.

pub use chat_panel::adapters::mock::{MockHttpClient, MockResponse};
pub use chat_panel::traits::HttpError;

use bytes::Bytes;

use super::{MESSAGES_URL, STREAM_URL};

/// Builder for a mock chatbot backend.
#[allow(dead_code)]
pub struct MockBackend {
    client: MockHttpClient,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// `GET /messages` answers with `json`.
    pub fn with_history(self, status: u16, json: &str) -> Self {
        self.client
            .set_method_response("GET", MESSAGES_URL, MockResponse::json(status, json));
        self
    }

    /// `DELETE /messages` answers with `status`.
    pub fn with_clear_status(self, status: u16) -> Self {
        self.client
            .set_method_response("DELETE", MESSAGES_URL, MockResponse::json(status, "{}"));
        self
    }

    /// `DELETE /messages` fails at the transport level.
    pub fn with_clear_unreachable(self) -> Self {
        self.client.set_method_response(
            "DELETE",
            MESSAGES_URL,
            MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
        );
        self
    }

    /// `POST /chat/stream` streams these chunks.
    pub fn with_stream<I, S>(self, chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.client.set_response(STREAM_URL, MockResponse::chunks(chunks));
        self
    }

    /// `POST /chat/stream` streams these chunks, then the body breaks.
    pub fn with_broken_stream(self, chunks: &[&str]) -> Self {
        let chunks = chunks.iter().map(|c| Bytes::from(c.to_string())).collect();
        self.client.set_response(
            STREAM_URL,
            MockResponse::StreamThenError(chunks, HttpError::Io("connection reset".to_string())),
        );
        self
    }

    /// `POST /chat/stream` cannot be made.
    pub fn with_stream_unreachable(self) -> Self {
        self.client.set_response(
            STREAM_URL,
            MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
        );
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}
