//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`ChannelSink`] - Render sink that forwards reply snapshots to the UI loop
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses and streamed bodies

pub mod channel_sink;
pub mod mock;
pub mod reqwest_http;

pub use channel_sink::ChannelSink;
pub use mock::{MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
