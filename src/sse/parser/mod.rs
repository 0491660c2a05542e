//! SSE frame reassembly.
//!
//! [`reassemble`] is the pure core: given the carried-over buffer and a new
//! chunk it returns the new buffer and the deltas completed by that chunk.
//! [`FrameReassembler`] wraps it with the buffer and UTF-8 state for one
//! response body.

mod frame;
mod utf8;

pub use frame::decode_frame;
pub use utf8::Utf8Decoder;

use crate::sse::events::{FrameOutcome, FRAME_DELIMITER};

/// Output of one reassembly step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reassembled {
    /// Incomplete tail to carry into the next step
    pub buffer: String,
    /// Text deltas from frames completed by this step, in arrival order
    pub deltas: Vec<String>,
}

/// Append `chunk` to `buffer`, cut out every complete frame and decode it.
///
/// Everything after the last delimiter is returned as the new buffer, even if
/// it happens to be a well-formed frame: a frame only counts once its
/// delimiter has arrived.
pub fn reassemble(buffer: &str, chunk: &str) -> Reassembled {
    let mut combined = String::with_capacity(buffer.len() + chunk.len());
    combined.push_str(buffer);
    combined.push_str(chunk);

    let mut pieces: Vec<&str> = combined.split(FRAME_DELIMITER).collect();
    // split() always yields at least one piece
    let tail = pieces.pop().unwrap_or_default().to_string();

    let deltas = pieces.into_iter().filter_map(frame_delta).collect();

    Reassembled {
        buffer: tail,
        deltas,
    }
}

/// Decode a frame and log anything that is not a delta.
fn frame_delta(frame: &str) -> Option<String> {
    match decode_frame(frame) {
        FrameOutcome::Delta(text) => Some(text),
        FrameOutcome::NoContent => {
            tracing::trace!("Data frame without content");
            None
        }
        FrameOutcome::Ignored => {
            tracing::trace!(frame = %frame.trim(), "Ignoring non-data frame");
            None
        }
        FrameOutcome::Malformed(err) => {
            tracing::warn!("Failed to parse SSE data: {}", err);
            None
        }
    }
}

/// Stateful reassembler for a single response body.
///
/// Not restartable: construct a fresh one per request.
#[derive(Debug, Default)]
pub struct FrameReassembler {
    buffer: String,
    decoder: Utf8Decoder,
}

impl FrameReassembler {
    /// Create an empty reassembler
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes from the response body.
    pub fn feed_bytes(&mut self, chunk: &[u8]) -> Vec<String> {
        let text = self.decoder.decode(chunk);
        self.feed_str(&text)
    }

    /// Feed already-decoded text.
    pub fn feed_str(&mut self, chunk: &str) -> Vec<String> {
        let Reassembled { buffer, deltas } = reassemble(&self.buffer, chunk);
        self.buffer = buffer;
        deltas
    }

    /// Text received but not yet terminated by a delimiter.
    pub fn buffered(&self) -> &str {
        &self.buffer
    }

    /// End the body. The unterminated remainder is discarded and returned
    /// (if non-blank) for diagnostics only.
    pub fn finish(self) -> Option<String> {
        let rest = self.buffer.trim();
        if rest.is_empty() && self.decoder.pending_len() == 0 {
            None
        } else {
            tracing::debug!(
                remainder_len = rest.len(),
                pending_bytes = self.decoder.pending_len(),
                "Discarding unterminated stream remainder"
            );
            Some(rest.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reassemble_single_complete_frame() {
        let out = reassemble("", "data: {\"content\":\"Hi\"}\n\n");
        assert_eq!(out.deltas, vec!["Hi".to_string()]);
        assert_eq!(out.buffer, "");
    }

    #[test]
    fn test_reassemble_keeps_incomplete_tail() {
        let out = reassemble("", "data: {\"content\":\"Hel");
        assert!(out.deltas.is_empty());
        assert_eq!(out.buffer, "data: {\"content\":\"Hel");

        let out = reassemble(&out.buffer, "lo\"}\n\ndata: {\"content\":\" world\"}\n\n");
        assert_eq!(out.deltas, vec!["Hello".to_string(), " world".to_string()]);
        assert_eq!(out.buffer, "");
    }

    #[test]
    fn test_reassemble_delimiter_split_across_chunks() {
        let out = reassemble("", "data: {\"content\":\"a\"}\n");
        assert!(out.deltas.is_empty());
        let out = reassemble(&out.buffer, "\ndata: {\"content\":\"b\"}");
        assert_eq!(out.deltas, vec!["a".to_string()]);
        assert_eq!(out.buffer, "data: {\"content\":\"b\"}");
    }

    #[test]
    fn test_reassemble_empty_chunk_is_noop() {
        let out = reassemble("partial", "");
        assert!(out.deltas.is_empty());
        assert_eq!(out.buffer, "partial");
    }

    #[test]
    fn test_reassemble_keepalive_only() {
        let out = reassemble("", ":keepalive\n\n");
        assert!(out.deltas.is_empty());
        assert_eq!(out.buffer, "");
    }

    #[test]
    fn test_reassemble_skips_malformed_frame() {
        let out = reassemble(
            "",
            "data: {not valid json}\n\ndata: {\"content\":\"ok\"}\n\n",
        );
        assert_eq!(out.deltas, vec!["ok".to_string()]);
    }

    #[test]
    fn test_reassemble_consecutive_delimiters() {
        let out = reassemble("", "\n\n\n\ndata: {\"content\":\"x\"}\n\n\n\n");
        assert_eq!(out.deltas, vec!["x".to_string()]);
    }

    #[test]
    fn test_reassemble_crlf_frames_stay_buffered() {
        // Only a bare "\n\n" delimits frames
        let out = reassemble("", "data: {\"content\":\"x\"}\r\n\r\n");
        assert!(out.deltas.is_empty());
    }

    #[test]
    fn test_frame_reassembler_bytes_with_split_character() {
        let wire = "data: {\"content\":\"caf\u{e9}\"}\n\n".as_bytes();
        let split = wire.iter().position(|&b| b == 0xC3).unwrap() + 1;

        let mut reassembler = FrameReassembler::new();
        assert!(reassembler.feed_bytes(&wire[..split]).is_empty());
        assert_eq!(reassembler.feed_bytes(&wire[split..]), vec!["café".to_string()]);
        assert_eq!(reassembler.finish(), None);
    }

    #[test]
    fn test_frame_reassembler_body_starting_with_bom() {
        let mut wire = b"\xEF\xBB\xBF".to_vec();
        wire.extend_from_slice(
            b"data: {\"content\":\"first\"}\n\ndata: {\"content\":\" second\"}\n\n",
        );

        let mut reassembler = FrameReassembler::new();
        assert_eq!(
            reassembler.feed_bytes(&wire),
            vec!["first".to_string(), " second".to_string()]
        );
        assert_eq!(reassembler.finish(), None);
    }

    #[test]
    fn test_frame_reassembler_finish_discards_remainder() {
        let mut reassembler = FrameReassembler::new();
        assert!(reassembler.feed_str("data: {\"content\":\"lost\"}").is_empty());
        assert_eq!(reassembler.buffered(), "data: {\"content\":\"lost\"}");
        assert_eq!(
            reassembler.finish(),
            Some("data: {\"content\":\"lost\"}".to_string())
        );
    }

    #[test]
    fn test_frame_reassembler_multiple_frames_in_one_chunk() {
        let mut reassembler = FrameReassembler::new();
        let deltas = reassembler.feed_str(
            ": connected\n\ndata: {\"content\":\"one\"}\n\nevent: ping\n\ndata: {\"content\":\"two\"}\n\n",
        );
        assert_eq!(deltas, vec!["one".to_string(), "two".to_string()]);
    }
}
