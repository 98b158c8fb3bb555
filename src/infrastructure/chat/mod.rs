//! Chat service HTTP client
//!
//! `reqwest`-based implementation of the `ChatClient` port against the
//! service's v4 REST API.

pub mod client;
pub mod types;

pub use client::{HttpChatClient, HttpChatClientConfig};
