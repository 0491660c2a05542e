//! Reqwest-based HTTP client adapter.
//!
//! This module provides the production HTTP client implementation using
//! reqwest, implementing the [`HttpClient`] trait from `crate::traits`.

use async_trait::async_trait;
use futures_util::StreamExt;
use std::time::Duration;

use crate::traits::{ByteStream, Headers, HttpClient, HttpError, Response};

/// HTTP client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use chat_panel::adapters::ReqwestHttpClient;
/// use chat_panel::traits::{Headers, HttpClient};
///
/// let client = ReqwestHttpClient::new();
/// let response = client.get("http://localhost:8000/api/v1/chatbot/messages", &Headers::new()).await?;
/// println!("Status: {}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a client whose connection attempts give up after `timeout`.
    ///
    /// Only the connect phase is bounded; a reply may stream for as long as
    /// the server keeps sending.
    pub fn with_connect_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(|e| HttpError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    /// Get a reference to the underlying reqwest::Client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }

    /// Send a request and buffer the whole body.
    async fn send_buffered(builder: reqwest::RequestBuilder) -> Result<Response, HttpError> {
        let response = builder.send().await.map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::with_headers(status, response_headers, body))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let builder = Self::apply_headers(self.client.get(url), headers);
        Self::send_buffered(builder).await
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let builder = Self::apply_headers(self.client.delete(url), headers);
        Self::send_buffered(builder).await
    }

    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<ByteStream, HttpError> {
        let builder = self.client.post(url).body(body.to_string());
        let builder = Self::apply_headers(builder, headers);

        let response = builder.send().await.map_err(Self::convert_error)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(HttpError::ServerError { status, message });
        }

        let stream = response.bytes_stream().map(|result| {
            result.map_err(|e| {
                if e.is_timeout() {
                    HttpError::Timeout(e.to_string())
                } else {
                    HttpError::Io(e.to_string())
                }
            })
        });

        Ok(Box::pin(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_http_client_with_connect_timeout() {
        let client = ReqwestHttpClient::with_connect_timeout(Duration::from_secs(5)).unwrap();
        let _ = client.inner();
    }

    #[test]
    fn test_apply_headers() {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "text/event-stream".to_string());

        let client = reqwest::Client::new();
        let request = ReqwestHttpClient::apply_headers(client.get("http://localhost/"), &headers)
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("accept").unwrap().to_str().unwrap(),
            "text/event-stream"
        );
    }

    #[test]
    fn test_convert_headers() {
        let mut header_map = reqwest::header::HeaderMap::new();
        header_map.insert(
            reqwest::header::CONTENT_TYPE,
            "text/event-stream".parse().unwrap(),
        );

        let headers = ReqwestHttpClient::convert_headers(&header_map);
        assert_eq!(
            headers.get("content-type"),
            Some(&"text/event-stream".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_invalid_url() {
        let client = ReqwestHttpClient::new();
        let result = client.get("not-a-valid-url", &Headers::new()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_connection_refused() {
        let client = ReqwestHttpClient::new();
        let result = client
            .get("http://127.0.0.1:59999/test", &Headers::new())
            .await;
        assert!(matches!(
            result,
            Err(HttpError::ConnectionFailed(_) | HttpError::Other(_))
        ));
    }

    #[tokio::test]
    async fn test_post_stream_connection_refused() {
        let client = ReqwestHttpClient::new();
        let result = client
            .post_stream("http://127.0.0.1:59999/test", "{}", &Headers::new())
            .await;
        assert!(result.is_err());
    }
}
