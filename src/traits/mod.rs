//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, DELETE, streaming POST)
//! - [`RenderSink`] - Display target for the accumulated assistant reply

pub mod http;
pub mod render;

pub use http::{ByteStream, Headers, HttpClient, HttpError, Response};
pub use render::RenderSink;
