//! Ping probe implementation.
//!
//! Calls the service's unauthenticated ping endpoint and logs the latency.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::ticker::{not_set_up, spawn_periodic};
use crate::domain::errors::ProbeError;
use crate::domain::models::config::PingProbeConfig;
use crate::domain::ports::{ChatClient, Probe, ProbeKind};

/// Checks basic service liveness.
pub struct PingProbe {
    config: PingProbeConfig,
    client: Arc<dyn ChatClient>,
    ready: bool,
}

impl PingProbe {
    /// Create a ping probe that checks liveness through `client`.
    pub fn new(config: PingProbeConfig, client: Arc<dyn ChatClient>) -> Self {
        Self {
            config,
            client,
            ready: false,
        }
    }
}

#[async_trait]
impl Probe for PingProbe {
    fn name(&self) -> String {
        "ping-probe".to_string()
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::Ping
    }

    async fn setup(&mut self) -> Result<(), ProbeError> {
        self.client
            .ping()
            .await
            .map_err(|e| ProbeError::Setup(format!("service unreachable: {e}")))?;
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
                    match client.ping().await {
                        Ok(()) => tracing::debug!(
                            probe = %name,
                            latency_ms = started.elapsed().as_millis() as u64,
                            "Ping succeeded"
                        ),
                        Err(err) => tracing::warn!(probe = %name, error = %err, "Ping failed"),
                    }
                }
            },
        )
    }
}
