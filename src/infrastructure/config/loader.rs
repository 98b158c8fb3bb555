use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use reqwest::Url;
use thiserror::Error;

use crate::domain::models::config::{Config, UserConfig};

/// Default project config file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "chatprobe.yaml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "CHATPROBE_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Host cannot be empty")]
    EmptyHost,

    #[error("Invalid host URL: {0}")]
    InvalidHost(String),

    #[error("Invalid frequency_secs for {0}: must be at least 1")]
    InvalidFrequency(&'static str),

    #[error("{probe} requires a non-empty {field}")]
    MissingField {
        probe: &'static str,
        field: &'static str,
    },

    #[error("Invalid broadcast timeout_secs: must be at least 1")]
    InvalidBroadcastTimeout,

    #[error("Missing credentials for {0}")]
    MissingCredentials(&'static str),

    #[error("Invalid client timeout_secs: must be at least 1")]
    InvalidClientTimeout,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `chatprobe.yaml` in the working directory (optional)
    /// 3. Environment variables (`CHATPROBE_*`, `__` separates nested keys)
    pub fn load() -> Result<Config> {
        let config: Config = Self::figment(Path::new(DEFAULT_CONFIG_FILE))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honouring env overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config: Config = Self::figment(path)
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate configuration after loading
    ///
    /// Options of disabled probes are not checked.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        Url::parse(&config.host).map_err(|e| ConfigError::InvalidHost(e.to_string()))?;

        let broadcast = &config.broadcast_probe;
        if broadcast.enabled {
            check_frequency("broadcast_probe", broadcast.frequency_secs)?;
            require("broadcast_probe", "team_name", &broadcast.team_name)?;
            require("broadcast_probe", "channel_name", &broadcast.channel_name)?;
            if broadcast.timeout_secs == 0 {
                return Err(ConfigError::InvalidBroadcastTimeout);
            }
        }

        let join = &config.channel_join_probe;
        if join.enabled {
            check_frequency("channel_join_probe", join.frequency_secs)?;
            require("channel_join_probe", "team_name", &join.team_name)?;
            require("channel_join_probe", "channel_name", &join.channel_name)?;
        }

        if config.ping_probe.enabled {
            check_frequency("ping_probe", config.ping_probe.frequency_secs)?;
        }

        let search = &config.search_probe;
        if search.enabled {
            check_frequency("search_probe", search.frequency_secs)?;
            require("search_probe", "team_name", &search.team_name)?;
            require("search_probe", "terms", &search.terms)?;
        }

        if config.login_probe.enabled {
            check_frequency("login_probe", config.login_probe.frequency_secs)?;
        }

        if config.api_ping_probe.enabled {
            check_frequency("api_ping_probe", config.api_ping_probe.frequency_secs)?;
        }

        // Both sessions are logged in at startup whenever anything runs.
        if config.any_probe_enabled() {
            check_credentials("user_a", &config.user_a)?;
            check_credentials("user_b", &config.user_b)?;
        }

        if config.client.timeout_secs == 0 {
            return Err(ConfigError::InvalidClientTimeout);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        Ok(())
    }
}

const fn check_frequency(probe: &'static str, frequency_secs: u64) -> Result<(), ConfigError> {
    if frequency_secs == 0 {
        return Err(ConfigError::InvalidFrequency(probe));
    }
    Ok(())
}

fn require(probe: &'static str, field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { probe, field });
    }
    Ok(())
}

fn check_credentials(user: &'static str, creds: &UserConfig) -> Result<(), ConfigError> {
    if creds.username.is_empty() || creds.password.is_empty() {
        return Err(ConfigError::MissingCredentials(user));
    }
    Ok(())
}
