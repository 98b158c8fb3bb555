//! Search probe implementation.
//!
//! Runs a full-text post search in a team and emits the response time as a
//! [`ReportMetric::SearchLatency`] report.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::ticker::{not_set_up, spawn_periodic};
use crate::domain::errors::ProbeError;
use crate::domain::models::config::SearchProbeConfig;
use crate::domain::models::report::{Report, ReportMetric, ReportSink};
use crate::domain::ports::{ChatClient, Probe, ProbeKind};

/// Measures post search latency.
pub struct SearchProbe {
    config: SearchProbeConfig,
    client: Arc<dyn ChatClient>,
    report_sink: ReportSink,
    team_id: Option<String>,
}

impl SearchProbe {
    /// Create a search probe that reports latency into `report_sink`.
    pub fn new(
        config: SearchProbeConfig,
        client: Arc<dyn ChatClient>,
        report_sink: ReportSink,
    ) -> Self {
        Self {
            config,
            client,
            report_sink,
            team_id: None,
        }
    }
}

#[async_trait]
impl Probe for SearchProbe {
    fn name(&self) -> String {
        "search-probe".to_string()
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::Search
    }

    async fn setup(&mut self) -> Result<(), ProbeError> {
        let team = self
            .client
            .get_team_by_name(&self.config.team_name)
            .await
            .map_err(|e| {
                ProbeError::Setup(format!("team {} unavailable: {e}", self.config.team_name))
            })?;
        self.team_id = Some(team.id);
        Ok(())
    }

    async fn start(&mut self) -> Result<(), ProbeError> {
        let team_id = self.team_id.clone().ok_or_else(not_set_up)?;
        let name = self.name();
        let client = self.client.clone();
        let sink = self.report_sink.clone();
        let terms = self.config.terms.clone();

        spawn_periodic(
            name.clone(),
            Duration::from_secs(self.config.frequency_secs),
            move || {
                let name = name.clone();
                let client = client.clone();
                let sink = sink.clone();
                let team_id = team_id.clone();
                let terms = terms.clone();
                async move {
                    let started = Instant::now();
                    let result = client.search_posts(&team_id, &terms).await;
                    let elapsed = started.elapsed();

                    match result {
                        Ok(posts) => {
                            tracing::debug!(
                                probe = %name,
                                results = posts.len(),
                                latency_ms = elapsed.as_millis() as u64,
                                "Search completed"
                            );
                            sink.emit(Report::success(name, ReportMetric::SearchLatency, elapsed));
                        }
                        Err(err) => {
                            tracing::warn!(probe = %name, error = %err, "Search failed");
                            sink.emit(Report::failure(name, ReportMetric::SearchLatency, elapsed));
                        }
                    }
                }
            },
        )
    }
}
