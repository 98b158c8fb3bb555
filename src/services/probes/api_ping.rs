//! API ping probe implementation.
//!
//! Issues an authenticated request (`users/me`) to check that the API layer,
//! not just the web front end, is answering.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::ticker::{not_set_up, spawn_periodic};
use crate::domain::errors::ProbeError;
use crate::domain::models::config::ApiPingProbeConfig;
use crate::domain::ports::{ChatClient, Probe, ProbeKind};

/// Checks an authenticated API round trip.
pub struct ApiPingProbe {
    config: ApiPingProbeConfig,
    client: Arc<dyn ChatClient>,
    ready: bool,
}

impl ApiPingProbe {
    /// Create an API ping probe over an already logged-in `client`.
    pub fn new(config: ApiPingProbeConfig, client: Arc<dyn ChatClient>) -> Self {
        Self {
            config,
            client,
            ready: false,
        }
    }
}

#[async_trait]
impl Probe for ApiPingProbe {
    fn name(&self) -> String {
        "api-ping-probe".to_string()
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::ApiPing
    }

    async fn setup(&mut self) -> Result<(), ProbeError> {
        self.client
            .get_me()
            .await
            .map_err(|e| ProbeError::Setup(format!("authenticated request failed: {e}")))?;
        self.ready = true;
        Ok(())
    }

    async fn start(&mut self) -> Result<(), ProbeError> {
        if !self.ready {
            return Err(not_set_up());
        }
        let name = self.name();
        let client = self.client.clone();

        spawn_periodic(
            name.clone(),
            Duration::from_secs(self.config.frequency_secs),
            move || {
                let name = name.clone();
                let client = client.clone();
                async move {
                    let started = Instant::now();
                    match client.get_me().await {
                        Ok(_) => tracing::debug!(
                            probe = %name,
                            latency_ms = started.elapsed().as_millis() as u64,
                            "API ping succeeded"
                        ),
                        Err(err) => {
                            tracing::warn!(probe = %name, error = %err, "API ping failed");
                        }
                    }
                }
            },
        )
    }
}
