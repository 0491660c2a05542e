//! Streaming UTF-8 decoding.
//!
//! Network chunks can end in the middle of a multi-byte character. The
//! decoder holds those trailing bytes back until the next chunk completes them.
//! A byte-order mark at the very start of the body is dropped.

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Incremental UTF-8 decoder that carries incomplete trailing sequences.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
    /// Set once the start of the body has been checked for a BOM
    started: bool,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a chunk, prefixed by any bytes held back from the previous call.
    ///
    /// Invalid sequences become U+FFFD. An incomplete sequence at the end of
    /// the input is kept for the next call.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(chunk);

        let mut rest: &[u8] = &bytes;
        if !self.started {
            if rest.is_empty() {
                return String::new();
            }
            // Could still be a BOM split across chunks
            if rest.len() < BOM.len() && BOM.starts_with(rest) {
                self.pending = bytes;
                return String::new();
            }
            self.started = true;
            rest = rest.strip_prefix(BOM).unwrap_or(rest);
        }

        let mut out = String::with_capacity(rest.len());

        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    // valid_up_to guarantees this prefix is well-formed
                    out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                    match e.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        None => {
                            self.pending = after.to_vec();
                            break;
                        }
                    }
                }
            }
        }

        out
    }

    /// Number of bytes held back waiting for the rest of a character.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
