//! SSE (Server-Sent Events) frame reassembly
//!
//! Turns the chat stream body into text deltas. The wire format is:
//! - frames separated by a blank line (`\n\n`)
//! - `data: <json>` frames carrying `{"content": "...", "done": bool}`
//! - anything else (`: keepalive`, `event:` lines) is ignored
//!
//! # Module structure
//! - `events` - Frame outcome and error types
//! - `payloads` - Data frame payload deserialization
//! - `parser` - Reassembly logic (reassemble, FrameReassembler, decode_frame)

mod events;
mod parser;
mod payloads;

// Re-export public types
pub use events::{FrameOutcome, SseParseError, DATA_PREFIX, FRAME_DELIMITER};
pub use parser::{decode_frame, reassemble, FrameReassembler, Reassembled, Utf8Decoder};
pub use payloads::DeltaPayload;
