//! Single consumer of the shared report channel.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::domain::models::report::{Report, ReportMetric, ReportReceiver};

/// Running totals for one probe/metric pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStats {
    /// Reports with `success == true`
    pub successes: u64,
    /// Reports with `success == false`
    pub failures: u64,
    /// Duration carried by the latest report
    pub last_duration: Duration,
    /// Outcome of the latest report
    pub last_success: bool,
    /// Timestamp of the latest report
    pub last_seen: DateTime<Utc>,
}

/// Drains reports, logs them and keeps per-probe counters.
#[derive(Clone, Default)]
pub struct ReportCollector {
    stats: Arc<RwLock<HashMap<(String, ReportMetric), ReportStats>>>,
}

impl ReportCollector {
    /// Create a collector with no recorded reports.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the drain loop. It ends once every sink clone has been dropped.
    pub fn spawn(&self, mut rx: ReportReceiver) -> JoinHandle<()> {
        let collector = self.clone();
        tokio::spawn(async move {
            while let Some(report) = rx.recv().await {
                collector.record(report).await;
            }
            tracing::info!("Report channel closed; collector stopping");
        })
    }

    /// Log and count a single report.
    pub async fn record(&self, report: Report) {
        tracing::info!(
            probe = %report.probe,
            metric = %report.metric,
            success = report.success,
            duration_ms = report.duration.as_millis() as u64,
            "report"
        );

        let mut stats = self.stats.write().await;
        let entry = stats
            .entry((report.probe, report.metric))
            .or_insert_with(|| ReportStats {
                successes: 0,
                failures: 0,
                last_duration: report.duration,
                last_success: report.success,
                last_seen: report.timestamp,
            });

        if report.success {
            entry.successes += 1;
        } else {
            entry.failures += 1;
        }
        entry.last_duration = report.duration;
        entry.last_success = report.success;
        entry.last_seen = report.timestamp;
    }

    /// Copy of the current counters.
    pub async fn snapshot(&self) -> HashMap<(String, ReportMetric), ReportStats> {
        self.stats.read().await.clone()
    }
}
