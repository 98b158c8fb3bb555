//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty stdout output
//! - Rotated JSON log files via tracing-appender
//! - A `Logger` port adapter for the lifecycle driver

pub mod config;
pub mod logger;
pub mod tracing_logger;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::{LoggerImpl, LOG_FILE_NAME};
pub use tracing_logger::TracingLogger;
