//! Chatbot API client for backend communication.
//!
//! Wraps an [`HttpClient`] with the three backend routes the panel uses:
//! history fetch, history clear, and the streamed chat reply.

use std::sync::Arc;

use crate::error::{ChatError, ChatResult};
use crate::models::{ChatRequest, HistoryResponse, ServerMessage};
use crate::traits::{ByteStream, Headers, HttpClient, Response};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path prefix of every chatbot route.
pub const API_PREFIX: &str = "/api/v1/chatbot";

/// Client for the chatbot backend.
#[derive(Clone)]
pub struct ChatClient {
    /// Base URL of the backend (scheme, host and port)
    pub base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ChatClient {
    /// Create a client for `base_url` on top of any HTTP implementation.
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// Create a client against [`DEFAULT_BASE_URL`].
    pub fn with_default_url(http: Arc<dyn HttpClient>) -> Self {
        Self::new(http, DEFAULT_BASE_URL)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// URL of the history endpoint (`GET` and `DELETE`).
    pub fn messages_url(&self) -> String {
        self.url("/messages")
    }

    /// URL of the streamed chat endpoint.
    pub fn stream_url(&self) -> String {
        self.url("/chat/stream")
    }

    fn ensure_success(response: Response) -> ChatResult<Response> {
        if response.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ChatError::Status {
            status: response.status,
            message,
        })
    }

    /// Fetch the stored conversation.
    ///
    /// Returns every stored message, unfiltered; the widget decides what to show.
    pub async fn fetch_history(&self) -> ChatResult<Vec<ServerMessage>> {
        let response = self.http.get(&self.messages_url(), &Headers::new()).await?;
        let response = Self::ensure_success(response)?;
        let history: HistoryResponse = response.json()?;
        tracing::debug!(count = history.messages.len(), "Fetched chat history");
        Ok(history.messages)
    }

    /// Ask the backend to forget the stored conversation.
    pub async fn clear_history(&self) -> ChatResult<()> {
        let response = self
            .http
            .delete(&self.messages_url(), &Headers::new())
            .await?;
        Self::ensure_success(response)?;
        Ok(())
    }

    /// Send one user turn and return the reply body as a byte stream.
    ///
    /// Fails before any byte is read when the request cannot be made or the
    /// server answers with a non-2xx status. Errors inside the returned
    /// stream mean the body broke off.
    pub async fn stream_chat(&self, text: &str) -> ChatResult<ByteStream> {
        let body = serde_json::to_string(&ChatRequest::user(text))?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "text/event-stream".to_string());

        match self.http.post_stream(&self.stream_url(), &body, &headers).await {
            Ok(stream) => Ok(stream),
            Err(crate::traits::HttpError::ServerError { status, message }) => {
                Err(ChatError::Status { status, message })
            }
            Err(e) => Err(e.into()),
        }
    }
}
