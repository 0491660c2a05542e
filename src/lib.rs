//! chat-panel - a terminal chat panel for a chatbot backend
//!
//! The core is [`sse`], which reassembles server-sent event frames from
//! arbitrary chunks, and [`stream`], which turns a reply body into live
//! renders of the accumulated text. The rest is the panel around it.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod sse;
pub mod state;
pub mod stream;
pub mod terminal;
pub mod traits;
pub mod ui;
