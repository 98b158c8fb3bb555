use std::fmt;

use async_trait::async_trait;

use crate::domain::errors::ProbeError;

/// The probe variants the supervisor knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    /// Message delivery between two sessions
    Broadcast,
    /// Join and leave a channel
    ChannelJoin,
    /// Unauthenticated system ping
    Ping,
    /// Full-text post search
    Search,
    /// Credential login
    Login,
    /// Authenticated API round trip
    ApiPing,
}

impl ProbeKind {
    /// Stable label used in probe names and log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Broadcast => "broadcast",
            Self::ChannelJoin => "channel-join",
            Self::Ping => "ping",
            Self::Search => "search",
            Self::Login => "login",
            Self::ApiPing => "api-ping",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monitoring unit driven through setup then start.
///
/// Instances go `Uninitialized -> Ready -> Running`. `setup` is called once;
/// `start` is only called after every probe in the collection has been set
/// up. `start` may spawn a detached task that keeps running for the life of
/// the process and returns once that launch has succeeded or failed.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Human-readable, stable label for diagnostics.
    fn name(&self) -> String;

    /// Variant of this probe.
    fn kind(&self) -> ProbeKind;

    /// One-time preparation (resolve targets, pre-flight checks).
    async fn setup(&mut self) -> Result<(), ProbeError>;

    /// Launch the monitoring activity.
    async fn start(&mut self) -> Result<(), ProbeError>;
}
