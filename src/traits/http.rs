//! HTTP client trait abstraction.
//!
//! Provides a trait-based abstraction for HTTP operations, enabling
//! dependency injection and mocking in tests.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::collections::HashMap;
use std::pin::Pin;
use thiserror::Error;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// A response body delivered chunk by chunk.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, HttpError>> + Send>>;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    /// Create a new response with headers.
    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as a string.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// HTTP client errors.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    /// Connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
    /// Server returned an error status before the body was streamed
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },
    /// Reading the body failed part-way
    #[error("IO error: {0}")]
    Io(String),
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Other error
    #[error("HTTP error: {0}")]
    Other(String),
}

/// Trait for HTTP client operations.
///
/// Implementations include the production reqwest-based client and a mock
/// client for testing.
///
/// # Example
///
/// ```ignore
/// use chat_panel::traits::{HttpClient, Headers, HttpError};
///
/// async fn fetch<C: HttpClient>(client: &C) -> Result<String, HttpError> {
///     let response = client.get("http://localhost:8000/api/v1/chatbot/messages", &Headers::new()).await?;
///     response.text().map_err(|e| HttpError::Other(e.to_string()))
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// Perform a DELETE request.
    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// Perform a POST request and return the body as a stream of chunks.
    ///
    /// Non-2xx statuses are reported as [`HttpError::ServerError`] before any
    /// chunk is yielded. Errors inside the stream mean the body broke off.
    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<ByteStream, HttpError>;
}
