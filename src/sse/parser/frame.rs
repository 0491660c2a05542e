//! Decoding of a single complete frame.

use serde_json::Value;

use crate::sse::events::{FrameOutcome, SseParseError, DATA_PREFIX};
use crate::sse::payloads::DeltaPayload;

/// Decode one complete frame (the text between two delimiters).
///
/// The frame is trimmed first; anything not starting with `data: ` is
/// [`FrameOutcome::Ignored`]. A payload that fails to parse is reported as
/// [`FrameOutcome::Malformed`] rather than an `Err` so callers can keep going.
pub fn decode_frame(frame: &str) -> FrameOutcome {
    let trimmed = frame.trim();
    let Some(json) = trimmed.strip_prefix(DATA_PREFIX) else {
        return FrameOutcome::Ignored;
    };

    let value: Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => {
            return FrameOutcome::Malformed(SseParseError::InvalidJson {
                payload: json.to_string(),
                message: e.to_string(),
            })
        }
    };

    match value {
        Value::Null => FrameOutcome::Malformed(SseParseError::NullPayload),
        Value::Object(_) => {
            // Both fields are untyped values, so any object deserializes
            let payload: DeltaPayload = serde_json::from_value(value).unwrap_or_default();
            if payload.is_done() {
                tracing::debug!("Data frame flagged done");
            }
            match payload.delta_text() {
                Some(text) => FrameOutcome::Delta(text),
                None => FrameOutcome::NoContent,
            }
        }
        // Scalars and arrays have no `content` field
        _ => FrameOutcome::NoContent,
    }
}
