//! SSE frame outcome and error types.

use thiserror::Error;

/// Prefix every interpreted frame must start with (after trimming).
pub const DATA_PREFIX: &str = "data: ";

/// Delimiter separating two frames on the wire.
pub const FRAME_DELIMITER: &str = "\n\n";

/// Result of decoding one complete frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// The frame carried a text fragment to append to the reply
    Delta(String),
    /// Valid data frame whose `content` was absent or falsy
    NoContent,
    /// Not a `data: ` frame (comment, keep-alive, `event:` line, blank)
    Ignored,
    /// The payload after `data: ` was not a JSON document
    Malformed(SseParseError),
}

impl FrameOutcome {
    /// Returns the delta text, if this outcome carries one.
    pub fn into_delta(self) -> Option<String> {
        match self {
            FrameOutcome::Delta(text) => Some(text),
            _ => None,
        }
    }
}

/// Frame-level parse errors.
///
/// These never escape the reassembler; they are logged and the frame skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SseParseError {
    /// Invalid JSON in the data payload
    #[error("Invalid JSON in data frame: {message}")]
    InvalidJson { payload: String, message: String },
    /// The JSON document was a bare `null`, which has no fields to read
    #[error("Data frame payload is null")]
    NullPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_delta() {
        assert_eq!(
            FrameOutcome::Delta("hi".to_string()).into_delta(),
            Some("hi".to_string())
        );
        assert_eq!(FrameOutcome::NoContent.into_delta(), None);
        assert_eq!(FrameOutcome::Ignored.into_delta(), None);
    }

    #[test]
    fn test_sse_parse_error_display() {
        let err = SseParseError::InvalidJson {
            payload: "{oops".to_string(),
            message: "key must be a string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid JSON in data frame: key must be a string"
        );

        assert_eq!(
            SseParseError::NullPayload.to_string(),
            "Data frame payload is null"
        );
    }
}
