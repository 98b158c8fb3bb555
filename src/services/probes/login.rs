//! Login probe implementation.
//!
//! Logs one monitoring user in through its own session. The factory builds
//! one instance per configured user.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::ticker::{not_set_up, spawn_periodic};
use crate::domain::errors::ProbeError;
use crate::domain::models::config::{LoginProbeConfig, UserConfig};
use crate::domain::ports::{ChatClient, Probe, ProbeKind};

/// Exercises credential login for a single user.
pub struct LoginProbe {
    config: LoginProbeConfig,
    client: Arc<dyn ChatClient>,
    user: UserConfig,
    user_id: Option<String>,
}

impl LoginProbe {
    /// Create a login probe bound to `user` and its own `client`.
    pub fn new(config: LoginProbeConfig, client: Arc<dyn ChatClient>, user: UserConfig) -> Self {
        Self {
            config,
            client,
            user,
            user_id: None,
        }
    }

    /// Username this instance logs in as.
    pub fn username(&self) -> &str {
        &self.user.username
    }
}

#[async_trait]
impl Probe for LoginProbe {
    fn name(&self) -> String {
        format!("login-probe({})", self.user.username)
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::Login
    }

    async fn setup(&mut self) -> Result<(), ProbeError> {
        let user = self
            .client
            .login(&self.user.username, &self.user.password)
            .await
            .map_err(|e| {
                ProbeError::Setup(format!("login as {} failed: {e}", self.user.username))
            })?;
        self.user_id = Some(user.id);
        Ok(())
    }

    async fn start(&mut self) -> Result<(), ProbeError> {
        let expected_id = self.user_id.clone().ok_or_else(not_set_up)?;
        let name = self.name();
        let client = self.client.clone();
        let user = self.user.clone();

        spawn_periodic(
            name.clone(),
            Duration::from_secs(self.config.frequency_secs),
            move || {
                let name = name.clone();
                let client = client.clone();
                let user = user.clone();
                let expected_id = expected_id.clone();
                async move {
                    let started = Instant::now();
                    match client.login(&user.username, &user.password).await {
                        Ok(logged_in) if logged_in.id == expected_id => tracing::debug!(
                            probe = %name,
                            latency_ms = started.elapsed().as_millis() as u64,
                            "Login succeeded"
                        ),
                        Ok(logged_in) => tracing::warn!(
                            probe = %name,
                            expected = %expected_id,
                            actual = %logged_in.id,
                            "Login returned a different user"
                        ),
                        Err(err) => tracing::warn!(probe = %name, error = %err, "Login failed"),
                    }
                }
            },
        )
    }
}
