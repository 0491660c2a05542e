//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses, chunked bodies, or errors for testing purposes.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{ByteStream, Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET, DELETE or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a buffered response
    Success(Response),
    /// Fail the request itself
    Error(HttpError),
    /// Stream these chunks, then end the body
    Stream(Vec<Bytes>),
    /// Stream these chunks, then break the body with an error
    StreamThenError(Vec<Bytes>, HttpError),
}

impl MockResponse {
    /// Convenience for a streamed body made of text chunks.
    pub fn chunks<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockResponse::Stream(
            chunks
                .into_iter()
                .map(|c| Bytes::from(c.into()))
                .collect(),
        )
    }

    /// Convenience for a buffered JSON body.
    pub fn json(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
    }
}

/// Mock HTTP client for testing.
///
/// Responses can be configured per URL (any method) or per method and URL;
/// the method-specific entry wins.
///
/// # Example
///
/// ```ignore
/// use chat_panel::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_method_response("GET", "http://test/api/v1/chatbot/messages",
///     MockResponse::json(200, r#"{"messages":[]}"#));
/// client.set_response("http://test/api/v1/chatbot/chat/stream",
///     MockResponse::chunks(["data: {\"content\":\"Hi\"}\n\n"]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Responses by URL (prefix match allowed)
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Responses by (method, URL)
    method_responses: Arc<Mutex<HashMap<(String, String), MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a URL, regardless of method.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a response for one method on a URL.
    pub fn set_method_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut responses = self.method_responses.lock().unwrap();
        responses.insert((method.to_string(), url.to_string()), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Record a request.
    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    /// Get the response for a request.
    fn get_response(&self, method: &str, url: &str) -> Option<MockResponse> {
        {
            let responses = self.method_responses.lock().unwrap();
            if let Some(response) = responses.get(&(method.to_string(), url.to_string())) {
                return Some(response.clone());
            }
        }

        let responses = self.responses.lock().unwrap();

        // First try exact match
        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        // Then try prefix match (for URL patterns)
        for (pattern, response) in responses.iter() {
            if url.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        // Finally use default
        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    fn buffered(&self, method: &str, url: &str) -> Result<Response, HttpError> {
        match self.get_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Stream(_)) | Some(MockResponse::StreamThenError(..)) => Err(
                HttpError::Other("Stream response on non-stream request".to_string()),
            ),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.buffered("GET", url)
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("DELETE", url, headers, None);
        self.buffered("DELETE", url)
    }

    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<ByteStream, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));

        match self.get_response("POST", url) {
            Some(MockResponse::Stream(chunks)) => {
                let stream = futures::stream::iter(chunks.into_iter().map(Ok));
                Ok(Box::pin(stream))
            }
            Some(MockResponse::StreamThenError(chunks, err)) => {
                let items = chunks
                    .into_iter()
                    .map(Ok)
                    .chain(std::iter::once(Err(err)));
                Ok(Box::pin(futures::stream::iter(items)))
            }
            Some(MockResponse::Success(response)) if !response.is_success() => {
                Err(HttpError::ServerError {
                    status: response.status,
                    message: response.text().unwrap_or_default(),
                })
            }
            Some(MockResponse::Success(_)) => Err(HttpError::Other(
                "Non-stream response on stream request".to_string(),
            )),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn test_get_with_response() {
        let client = MockHttpClient::new();
        client.set_response("https://example.com/test", MockResponse::json(200, "Hello"));

        let response = client
            .get("https://example.com/test", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Bytes::from("Hello"));

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].url, "https://example.com/test");
    }

    #[tokio::test]
    async fn test_method_response_wins() {
        let client = MockHttpClient::new();
        client.set_response("https://example.com/messages", MockResponse::json(200, "any"));
        client.set_method_response(
            "DELETE",
            "https://example.com/messages",
            MockResponse::Error(HttpError::ConnectionFailed("down".to_string())),
        );

        assert!(client
            .get("https://example.com/messages", &Headers::new())
            .await
            .is_ok());
        assert!(matches!(
            client
                .delete("https://example.com/messages", &Headers::new())
                .await,
            Err(HttpError::ConnectionFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_post_stream_with_chunks() {
        let client = MockHttpClient::new();
        client.set_response("https://example.com/stream", MockResponse::chunks(["a", "b"]));

        let stream = client
            .post_stream("https://example.com/stream", "{}", &Headers::new())
            .await
            .unwrap();
        let chunks: Vec<_> = stream.collect().await;
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].as_ref().unwrap(), &Bytes::from("a"));

        let requests = client.get_requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].body, Some("{}".to_string()));
    }

    #[tokio::test]
    async fn test_post_stream_then_error() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/stream",
            MockResponse::StreamThenError(
                vec![Bytes::from("a")],
                HttpError::Io("reset".to_string()),
            ),
        );

        let stream = client
            .post_stream("https://example.com/stream", "{}", &Headers::new())
            .await
            .unwrap();
        let chunks: Vec<_> = stream.collect().await;
        assert_eq!(chunks.len(), 2);
        assert!(chunks[1].is_err());
    }

    #[tokio::test]
    async fn test_post_stream_error_status() {
        let client = MockHttpClient::new();
        client.set_response("https://example.com/stream", MockResponse::json(500, "boom"));

        let result = client
            .post_stream("https://example.com/stream", "{}", &Headers::new())
            .await;
        match result {
            Err(HttpError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            _ => panic!("Expected ServerError"),
        }
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();
        let result = client.get("https://example.com/none", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }
}
