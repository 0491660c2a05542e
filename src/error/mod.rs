//! Error types for the chat panel.
//!
//! - [`ChatError`] - failures of a [`crate::client::ChatClient`] call
//! - [`ErrorCategory`] - coarse classification for logging and hints
//!
//! Frame-level errors ([`crate::sse::SseParseError`]) and transport errors
//! ([`crate::traits::HttpError`]) are defined next to the code that raises them.
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, DNS, timeout, broken body | Yes |
//! | Server | Backend errors (5xx) | Yes |
//! | Client | 4xx, undecodable body | No |
//! | Configuration | Invalid settings | No |

mod category;

pub use category::ErrorCategory;

use thiserror::Error;

use crate::traits::HttpError;

/// Type alias for Results using ChatError.
pub type ChatResult<T> = Result<T, ChatError>;

/// Error type for chat client operations
#[derive(Debug, Error)]
pub enum ChatError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Server answered with a non-2xx status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings could not be used
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ChatError {
    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChatError::Http(HttpError::ServerError { status, .. })
            | ChatError::Status { status, .. } => {
                if *status >= 500 {
                    ErrorCategory::Server
                } else {
                    ErrorCategory::Client
                }
            }
            ChatError::Http(HttpError::InvalidUrl(_)) => ErrorCategory::Configuration,
            ChatError::Http(_) => ErrorCategory::Network,
            ChatError::Json(_) => ErrorCategory::Client,
            ChatError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Check if retrying the same call might succeed.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Returns the HTTP status when the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ChatError::Http(HttpError::ServerError { status, .. })
            | ChatError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
