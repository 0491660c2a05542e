//! Mock implementations for testing.
//!
//! Lets the client and the app controller run without a backend.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses and streamed bodies

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
