use async_trait::async_trait;

use crate::domain::ports::{Level, Logger};

/// [`Logger`] adapter that forwards to the global `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a new adapter
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Logger for TracingLogger {
    async fn log(&self, level: Level, message: &str) {
        match level {
            Level::Debug => tracing::debug!(target: "chatprobe::lifecycle", "{message}"),
            Level::Info => tracing::info!(target: "chatprobe::lifecycle", "{message}"),
            Level::Warn => tracing::warn!(target: "chatprobe::lifecycle", "{message}"),
            Level::Error => tracing::error!(target: "chatprobe::lifecycle", "{message}"),
        }
    }
}
