use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// What a report measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMetric {
    /// Time from posting a message to the listener observing it
    BroadcastDelivery,
    /// Time to answer a post search
    SearchLatency,
}

impl ReportMetric {
    /// Stable metric label
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BroadcastDelivery => "broadcast_delivery",
            Self::SearchLatency => "search_latency",
        }
    }
}

impl fmt::Display for ReportMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single measurement emitted by a probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Name of the probe that produced the measurement
    pub probe: String,

    /// What was measured
    pub metric: ReportMetric,

    /// Measured latency
    pub duration: Duration,

    /// Whether the check succeeded
    pub success: bool,

    /// When the measurement was taken
    pub timestamp: DateTime<Utc>,
}

impl Report {
    /// A successful measurement taken now
    pub fn success(probe: impl Into<String>, metric: ReportMetric, duration: Duration) -> Self {
        Self {
            probe: probe.into(),
            metric,
            duration,
            success: true,
            timestamp: Utc::now(),
        }
    }

    /// A failed measurement taken now
    pub fn failure(probe: impl Into<String>, metric: ReportMetric, duration: Duration) -> Self {
        Self {
            success: false,
            ..Self::success(probe, metric, duration)
        }
    }
}

/// Receiving half of the report channel, owned by the single consumer
pub type ReportReceiver = mpsc::UnboundedReceiver<Report>;

/// Write handle on the shared report channel
///
/// Cheap to clone; every producer probe holds its own clone. Sends never
/// block, so producers running on separate tasks can emit concurrently.
#[derive(Debug, Clone)]
pub struct ReportSink {
    tx: mpsc::UnboundedSender<Report>,
}

impl ReportSink {
    /// Create a sink and the receiver that drains it
    pub fn channel() -> (Self, ReportReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Enqueue a report; dropped with a debug log if the consumer is gone
    pub fn emit(&self, report: Report) {
        if let Err(err) = self.tx.send(report) {
            tracing::debug!(
                probe = %err.0.probe,
                metric = %err.0.metric,
                "Report consumer closed; dropping report"
            );
        }
    }

    /// Returns true once the receiving side has been dropped
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
