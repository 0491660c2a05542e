//! Streaming reply assembly.
//!
//! Bridges a response body (a stream of byte chunks) to the pure frame
//! reassembler and on to a [`RenderSink`]:
//!
//! ```text
//! body chunks ──► FrameReassembler ──► deltas ──► AccumulatedReply ──► sink.render(full text)
//! ```
//!
//! Transport errors end the stream quietly; whatever was accumulated stays.

use std::collections::VecDeque;

use bytes::Bytes;
use futures_util::stream::{self, Stream};
use futures_util::StreamExt;

use crate::sse::FrameReassembler;
use crate::traits::{HttpError, RenderSink};

/// Running concatenation of the deltas of one assistant turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccumulatedReply {
    text: String,
    deltas: usize,
}

impl AccumulatedReply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fragment.
    pub fn push(&mut self, delta: &str) {
        self.text.push_str(delta);
        self.deltas += 1;
    }

    /// The reply so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of fragments appended.
    pub fn delta_count(&self) -> usize {
        self.deltas
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Turn a response body into a lazy stream of text deltas.
///
/// The next chunk is only pulled once every delta of the previous chunk has
/// been consumed. The stream ends at the end of the body or at the first
/// transport error; an unterminated trailing frame is dropped.
pub fn delta_stream<S>(body: S) -> impl Stream<Item = String>
where
    S: Stream<Item = Result<Bytes, HttpError>> + Unpin,
{
    stream::unfold(
        (body, FrameReassembler::new(), VecDeque::new()),
        |(mut body, mut reassembler, mut ready)| async move {
            loop {
                if let Some(delta) = ready.pop_front() {
                    return Some((delta, (body, reassembler, ready)));
                }

                match body.next().await {
                    Some(Ok(chunk)) => {
                        ready.extend(reassembler.feed_bytes(&chunk));
                    }
                    Some(Err(e)) => {
                        tracing::error!("Stream reading error: {}", e);
                        reassembler.finish();
                        return None;
                    }
                    None => {
                        reassembler.finish();
                        return None;
                    }
                }
            }
        },
    )
}

/// Consume a response body, rendering the accumulated reply after every delta.
///
/// Returns the final reply, which is empty when no frame carried content.
/// Never fails: a broken body simply ends the reply early.
pub async fn assemble_reply<S, R>(body: S, sink: &mut R) -> String
where
    S: Stream<Item = Result<Bytes, HttpError>> + Unpin,
    R: RenderSink + ?Sized,
{
    let deltas = delta_stream(body);
    futures::pin_mut!(deltas);

    let mut reply = AccumulatedReply::new();
    while let Some(delta) = deltas.next().await {
        reply.push(&delta);
        sink.render(reply.text());
    }

    tracing::debug!(
        deltas = reply.delta_count(),
        chars = reply.text().chars().count(),
        "Reply stream finished"
    );
    reply.into_text()
}
