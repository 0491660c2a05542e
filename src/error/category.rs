//! Error category classification.
//!
//! Categories drive logging labels and whether a failure is worth retrying
//! by hand (the panel never retries on its own).

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS, timeout, or a body that broke off mid-read.
    Network,

    /// Backend returned a 5xx status.
    Server,

    /// Backend rejected the request (4xx) or sent a body we could not decode.
    Client,

    /// Invalid settings (bad base URL, unreadable log path).
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the chat server is reachable and try again",
            ErrorCategory::Server => "The server may be experiencing issues. Please try again later",
            ErrorCategory::Client => "The server rejected the request",
            ErrorCategory::Configuration => "Check --url and the CHAT_PANEL_* environment variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
