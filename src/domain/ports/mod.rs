//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces the core depends on:
//! - `ChatClient`: requests against the monitored chat service
//! - `Logger`: diagnostic narration for the lifecycle driver
//! - `Probe`: the monitoring unit driven through setup and start

pub mod chat_client;
pub mod logger;
pub mod probe;

pub use chat_client::{ChatClient, ChatClientError, ChatResult};
pub use logger::{Level, Logger};
pub use probe::{Probe, ProbeKind};
