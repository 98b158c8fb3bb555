//! Broadcast probe implementation.
//!
//! One session (the speaker) posts a uniquely tagged message into a channel
//! and a second session (the listener) polls the channel until the message
//! shows up. The delivery latency, or the failure to deliver within the
//! timeout, is emitted as a [`ReportMetric::BroadcastDelivery`] report.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use async_trait::async_trait;
use uuid::Uuid;

use super::ticker::{not_set_up, spawn_periodic};
use crate::domain::errors::ProbeError;
use crate::domain::models::chat::Channel;
use crate::domain::models::config::BroadcastProbeConfig;
use crate::domain::models::report::{Report, ReportMetric, ReportSink};
use crate::domain::ports::{ChatClient, Probe, ProbeKind};

/// Delay between listener polls while waiting for a broadcast.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Prefix of every broadcast message, followed by a UUID.
pub const BROADCAST_MESSAGE_PREFIX: &str = "chatprobe broadcast";

/// Measures message delivery latency between two sessions.
pub struct BroadcastProbe {
    config: BroadcastProbeConfig,
    speaker: Arc<dyn ChatClient>,
    listener: Arc<dyn ChatClient>,
    report_sink: ReportSink,
    channel: Option<Channel>,
}

impl BroadcastProbe {
    /// Create a broadcast probe that posts through `speaker` and observes
    /// through `listener`.
    pub fn new(
        config: BroadcastProbeConfig,
        speaker: Arc<dyn ChatClient>,
        listener: Arc<dyn ChatClient>,
        report_sink: ReportSink,
    ) -> Self {
        Self {
            config,
            speaker,
            listener,
            report_sink,
            channel: None,
        }
    }

    /// Post one message and wait for the listener to see it.
    async fn broadcast_once(
        speaker: &dyn ChatClient,
        listener: &dyn ChatClient,
        channel_id: &str,
        timeout: Duration,
    ) -> anyhow::Result<Duration> {
        let message = format!("{BROADCAST_MESSAGE_PREFIX} {}", Uuid::new_v4());
        let started = Instant::now();

        let post = speaker
            .create_post(channel_id, &message)
            .await
            .context("speaker could not post")?;

        let observed = tokio::time::timeout(timeout, async {
            loop {
                let posts = listener
                    .get_posts_since(channel_id, post.create_at - 1)
                    .await
                    .context("listener could not read channel")?;
                if posts.iter().any(|p| p.id == post.id) {
                    return anyhow::Ok(started.elapsed());
                }
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        })
        .await;

        match observed {
            Ok(result) => result,
            Err(_) => anyhow::bail!("broadcast not observed within {}s", timeout.as_secs()),
        }
    }
}

#[async_trait]
impl Probe for BroadcastProbe {
    fn name(&self) -> String {
        "broadcast-probe".to_string()
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::Broadcast
    }

    async fn setup(&mut self) -> Result<(), ProbeError> {
        let team = self
            .speaker
            .get_team_by_name(&self.config.team_name)
            .await
            .map_err(|e| {
                ProbeError::Setup(format!("team {} unavailable: {e}", self.config.team_name))
            })?;

        let channel = self
            .speaker
            .get_channel_by_name(&team.id, &self.config.channel_name)
            .await
            .map_err(|e| {
                ProbeError::Setup(format!(
                    "speaker cannot access channel {}: {e}",
                    self.config.channel_name
                ))
            })?;

        // The listener must be able to read the same channel.
        self.listener
            .get_channel_by_name(&team.id, &self.config.channel_name)
            .await
            .map_err(|e| {
                ProbeError::Setup(format!(
                    "listener cannot access channel {}: {e}",
                    self.config.channel_name
                ))
            })?;

        self.channel = Some(channel);
        Ok(())
    }

    async fn start(&mut self) -> Result<(), ProbeError> {
        let channel_id = self.channel.as_ref().ok_or_else(not_set_up)?.id.clone();
        if self.config.timeout_secs == 0 {
            return Err(ProbeError::Start(
                "broadcast timeout must be non-zero".to_string(),
            ));
        }
        let name = self.name();
        let speaker = self.speaker.clone();
        let listener = self.listener.clone();
        let sink = self.report_sink.clone();
        let timeout = Duration::from_secs(self.config.timeout_secs);

        spawn_periodic(
            name.clone(),
            Duration::from_secs(self.config.frequency_secs),
            move || {
                let name = name.clone();
                let speaker = speaker.clone();
                let listener = listener.clone();
                let sink = sink.clone();
                let channel_id = channel_id.clone();
                async move {
                    let started = Instant::now();
                    match Self::broadcast_once(&*speaker, &*listener, &channel_id, timeout).await
                    {
                        Ok(latency) => {
                            tracing::debug!(
                                probe = %name,
                                latency_ms = latency.as_millis() as u64,
                                "Broadcast delivered"
                            );
                            sink.emit(Report::success(
                                name,
                                ReportMetric::BroadcastDelivery,
                                latency,
                            ));
                        }
                        Err(err) => {
                            tracing::warn!(probe = %name, error = %err, "Broadcast failed");
                            sink.emit(Report::failure(
                                name,
                                ReportMetric::BroadcastDelivery,
                                started.elapsed(),
                            ));
                        }
                    }
                }
            },
        )
    }
}
