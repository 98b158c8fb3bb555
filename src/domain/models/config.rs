use serde::{Deserialize, Serialize};

/// Main configuration structure for chatprobe
///
/// Probe sections are declared in the order the probes are built, set up
/// and started.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Base URL of the monitored chat service
    #[serde(default)]
    pub host: String,

    /// Credentials for the first session (speaker side)
    #[serde(default)]
    pub user_a: UserConfig,

    /// Credentials for the second session (listener side)
    #[serde(default)]
    pub user_b: UserConfig,

    /// Broadcast delivery probe
    #[serde(default)]
    pub broadcast_probe: BroadcastProbeConfig,

    /// Channel join/leave probe
    #[serde(default)]
    pub channel_join_probe: ChannelJoinProbeConfig,

    /// System ping probe
    #[serde(default)]
    pub ping_probe: PingProbeConfig,

    /// Post search probe
    #[serde(default)]
    pub search_probe: SearchProbeConfig,

    /// Login probe (runs once per user)
    #[serde(default)]
    pub login_probe: LoginProbeConfig,

    /// Authenticated API ping probe
    #[serde(default)]
    pub api_ping_probe: ApiPingProbeConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub client: ClientConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Returns true if at least one probe section is enabled
    pub const fn any_probe_enabled(&self) -> bool {
        self.broadcast_probe.enabled
            || self.channel_join_probe.enabled
            || self.ping_probe.enabled
            || self.search_probe.enabled
            || self.login_probe.enabled
            || self.api_ping_probe.enabled
    }
}

/// Login credentials for one monitoring user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UserConfig {
    /// Login name or email
    #[serde(default)]
    pub username: String,

    /// Password
    #[serde(default)]
    pub password: String,
}

const fn default_frequency_secs() -> u64 {
    60
}

const fn default_broadcast_timeout_secs() -> u64 {
    10
}

/// Broadcast probe: user A posts, user B must observe the post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BroadcastProbeConfig {
    /// Whether the probe is built
    #[serde(default)]
    pub enabled: bool,

    /// Team containing the broadcast channel
    #[serde(default)]
    pub team_name: String,

    /// Channel the probe posts into
    #[serde(default)]
    pub channel_name: String,

    /// Seconds between broadcasts
    #[serde(default = "default_frequency_secs")]
    pub frequency_secs: u64,

    /// Seconds the listener waits for a broadcast to arrive
    #[serde(default = "default_broadcast_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BroadcastProbeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            team_name: String::new(),
            channel_name: String::new(),
            frequency_secs: default_frequency_secs(),
            timeout_secs: default_broadcast_timeout_secs(),
        }
    }
}

/// Channel join probe: join and leave a channel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChannelJoinProbeConfig {
    /// Whether the probe is built
    #[serde(default)]
    pub enabled: bool,

    /// Team containing the channel
    #[serde(default)]
    pub team_name: String,

    /// Channel to join and leave
    #[serde(default)]
    pub channel_name: String,

    /// Seconds between join/leave cycles
    #[serde(default = "default_frequency_secs")]
    pub frequency_secs: u64,
}

impl Default for ChannelJoinProbeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            team_name: String::new(),
            channel_name: String::new(),
            frequency_secs: default_frequency_secs(),
        }
    }
}

/// Ping probe: unauthenticated liveness check
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PingProbeConfig {
    /// Whether the probe is built
    #[serde(default)]
    pub enabled: bool,

    /// Seconds between pings
    #[serde(default = "default_frequency_secs")]
    pub frequency_secs: u64,
}

impl Default for PingProbeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            frequency_secs: default_frequency_secs(),
        }
    }
}

/// Search probe: full-text post search latency
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchProbeConfig {
    /// Whether the probe is built
    #[serde(default)]
    pub enabled: bool,

    /// Team to search in
    #[serde(default)]
    pub team_name: String,

    /// Search terms
    #[serde(default)]
    pub terms: String,

    /// Seconds between searches
    #[serde(default = "default_frequency_secs")]
    pub frequency_secs: u64,
}

impl Default for SearchProbeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            team_name: String::new(),
            terms: String::new(),
            frequency_secs: default_frequency_secs(),
        }
    }
}

/// Login probe: repeated credential login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoginProbeConfig {
    /// Whether the probe is built (once per user)
    #[serde(default)]
    pub enabled: bool,

    /// Seconds between logins
    #[serde(default = "default_frequency_secs")]
    pub frequency_secs: u64,
}

impl Default for LoginProbeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            frequency_secs: default_frequency_secs(),
        }
    }
}

/// API ping probe: authenticated request round trip
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ApiPingProbeConfig {
    /// Whether the probe is built
    #[serde(default)]
    pub enabled: bool,

    /// Seconds between requests
    #[serde(default = "default_frequency_secs")]
    pub frequency_secs: u64,
}

impl Default for ApiPingProbeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            frequency_secs: default_frequency_secs(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClientConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_client_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_client_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_client_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rotated log files; stdout only when unset
    #[serde(default)]
    pub log_dir: Option<String>,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_log_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_log_rotation(),
        }
    }
}
