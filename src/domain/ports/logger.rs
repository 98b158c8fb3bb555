use async_trait::async_trait;

/// Log level enumeration for lifecycle narration
///
/// Levels are ordered from most verbose (Debug) to most severe (Error).
///
/// # Examples
///
/// ```
/// use chatprobe::domain::ports::Level;
///
/// assert!(Level::Error > Level::Info);
/// assert_eq!(Level::Warn.as_str(), "WARN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Debug information useful during development
    Debug,
    /// Informational messages about normal operations
    Info,
    /// Warning messages for potentially problematic situations
    Warn,
    /// Error messages for failure conditions
    Error,
}

impl Level {
    /// Returns the string representation of the log level
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// Port trait for the diagnostic sink used by the lifecycle driver
///
/// The driver narrates progress through this trait instead of calling
/// `tracing` directly so that callers can capture the narration. The
/// production adapter is
/// [`TracingLogger`](crate::infrastructure::logging::TracingLogger); tests
/// use an in-memory recorder.
///
/// # Examples
///
/// ```
/// use chatprobe::domain::ports::Logger;
///
/// async fn announce(logger: &dyn Logger, probe: &str) {
///     logger.info(&format!("Setting up probe: {probe}")).await;
/// }
/// ```
#[async_trait]
pub trait Logger: Send + Sync {
    /// Log a message at the given level
    async fn log(&self, level: Level, message: &str);

    /// Log a debug-level message
    async fn debug(&self, message: &str) {
        self.log(Level::Debug, message).await;
    }

    /// Log an info-level message
    async fn info(&self, message: &str) {
        self.log(Level::Info, message).await;
    }

    /// Log a warning-level message
    async fn warn(&self, message: &str) {
        self.log(Level::Warn, message).await;
    }

    /// Log an error-level message
    async fn error(&self, message: &str) {
        self.log(Level::Error, message).await;
    }
}
