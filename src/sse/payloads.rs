//! Payload structs for data frames.
//!
//! The backend sends `data: {"content": "...", "done": false}` frames.
//! Only `content` is interpreted; everything else is tolerated.

use serde::Deserialize;
use serde_json::{Number, Value};

/// Payload of one `data: ` frame.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DeltaPayload {
    /// Incremental text fragment. Kept as a raw value so non-string
    /// fragments can be judged for truthiness like the wire producer intends.
    #[serde(default)]
    pub content: Option<Value>,
    /// End-of-turn marker. Parsed for logging only; the stream ends with the body.
    #[serde(default)]
    pub done: Option<Value>,
}

impl DeltaPayload {
    /// Whether the producer flagged this frame as the end of the turn.
    pub fn is_done(&self) -> bool {
        matches!(self.done, Some(Value::Bool(true)))
    }

    /// Returns the text to append, or `None` when `content` is absent or falsy.
    ///
    /// Appended values: non-empty strings, non-zero numbers (in their
    /// shortest decimal form), `true`. Arrays and objects are not text and
    /// are skipped.
    pub fn delta_text(&self) -> Option<String> {
        match self.content.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => number_text(n),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

/// Shortest decimal text of a non-zero number: `1.0` reads as `1`, and very
/// large or very small magnitudes use exponent form like `1e+21`.
fn number_text(n: &Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return (u != 0).then(|| u.to_string());
    }

    let f = n.as_f64().filter(|f| f.is_finite() && *f != 0.0)?;
    let magnitude = f.abs();
    if (1e-6..1e21).contains(&magnitude) {
        // f64 Display is already the shortest round-trip form without ".0"
        return Some(f.to_string());
    }

    let text = format!("{:e}", f);
    Some(match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => text,
    })
}
