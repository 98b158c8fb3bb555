//! Channel join probe implementation.
//!
//! Joins a channel and immediately leaves it again, logging the round trip.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::ticker::{not_set_up, spawn_periodic};
use crate::domain::errors::ProbeError;
use crate::domain::models::config::ChannelJoinProbeConfig;
use crate::domain::ports::{ChatClient, Probe, ProbeKind};

/// Target resolved during setup.
#[derive(Debug, Clone)]
struct JoinTarget {
    channel_id: String,
    user_id: String,
}

/// Exercises channel membership changes.
pub struct ChannelJoinProbe {
    config: ChannelJoinProbeConfig,
    client: Arc<dyn ChatClient>,
    target: Option<JoinTarget>,
}

impl ChannelJoinProbe {
    /// Create a channel-join probe acting as the session user of `client`.
    pub fn new(config: ChannelJoinProbeConfig, client: Arc<dyn ChatClient>) -> Self {
        Self {
            config,
            client,
            target: None,
        }
    }

    async fn join_and_leave(client: &dyn ChatClient, target: &JoinTarget) -> anyhow::Result<()> {
        client.join_channel(&target.channel_id, &target.user_id).await?;
        client.leave_channel(&target.channel_id, &target.user_id).await?;
        Ok(())
    }
}

#[async_trait]
impl Probe for ChannelJoinProbe {
    fn name(&self) -> String {
        "channel-join-probe".to_string()
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::ChannelJoin
    }

    async fn setup(&mut self) -> Result<(), ProbeError> {
        let team = self
            .client
            .get_team_by_name(&self.config.team_name)
            .await
            .map_err(|e| {
                ProbeError::Setup(format!("team {} unavailable: {e}", self.config.team_name))
            })?;

        let channel = self
            .client
            .get_channel_by_name(&team.id, &self.config.channel_name)
            .await
            .map_err(|e| {
                ProbeError::Setup(format!(
                    "channel {} unavailable: {e}",
                    self.config.channel_name
                ))
            })?;

        let me = self.client.get_me().await?;

        self.target = Some(JoinTarget {
            channel_id: channel.id,
            user_id: me.id,
        });
        Ok(())
    }

    async fn start(&mut self) -> Result<(), ProbeError> {
        let target = self.target.clone().ok_or_else(not_set_up)?;
        let name = self.name();
        let client = self.client.clone();

        spawn_periodic(
            name.clone(),
            Duration::from_secs(self.config.frequency_secs),
            move || {
                let name = name.clone();
                let client = client.clone();
                let target = target.clone();
                async move {
                    let started = Instant::now();
                    match Self::join_and_leave(&*client, &target).await {
                        Ok(()) => tracing::debug!(
                            probe = %name,
                            latency_ms = started.elapsed().as_millis() as u64,
                            "Channel join/leave succeeded"
                        ),
                        Err(err) => tracing::warn!(
                            probe = %name,
                            error = %err,
                            "Channel join/leave failed"
                        ),
                    }
                }
            },
        )
    }
}
