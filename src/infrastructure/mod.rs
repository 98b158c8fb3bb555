//! Infrastructure layer module
//!
//! This module contains the infrastructure adapters:
//! - Chat service HTTP client
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod chat;
pub mod config;
pub mod logging;
