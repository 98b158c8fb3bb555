//! Domain errors for the probe lifecycle.

use std::fmt;

use thiserror::Error;

use super::ports::ChatClientError;

/// Lifecycle phase a probe was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    /// One-time preparation before the probe can run.
    Setup,
    /// Launch of the probe's monitoring activity.
    Start,
}

impl LifecyclePhase {
    /// Verb phrase used in error and log messages.
    pub const fn as_verb(self) -> &'static str {
        match self {
            Self::Setup => "set up",
            Self::Start => "start",
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_verb())
    }
}

/// Errors raised by a single probe during setup or start.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The probe cannot reach a ready state.
    #[error("setup failed: {0}")]
    Setup(String),

    /// The probe's monitoring activity failed to launch.
    #[error("start failed: {0}")]
    Start(String),

    /// A request to the chat service failed.
    #[error("chat service request failed: {0}")]
    Client(#[from] ChatClientError),
}

/// A probe failure wrapped with the probe's label and the phase it failed in.
///
/// Surfaced by the lifecycle driver; the underlying [`ProbeError`] is
/// available through [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("could not {phase} probe {probe}")]
pub struct OrchestrationError {
    /// Phase that failed.
    pub phase: LifecyclePhase,
    /// Label of the failing probe, as returned by `Probe::name`.
    pub probe: String,
    /// The probe's own error.
    #[source]
    pub source: ProbeError,
}

impl OrchestrationError {
    /// Wrap a probe error with its phase and probe label.
    pub fn new(phase: LifecyclePhase, probe: impl Into<String>, source: ProbeError) -> Self {
        Self {
            phase,
            probe: probe.into(),
            source,
        }
    }
}
