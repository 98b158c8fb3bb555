//! Implementation of the `chatprobe run` command.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::{as_dyn, http_client, load_config};
use crate::cli::output::{output, probe_lines, CommandOutput};
use crate::domain::models::report::ReportSink;
use crate::domain::ports::ChatClient;
use crate::infrastructure::logging::{LogConfig, LoggerImpl, TracingLogger};
use crate::services::{build_probes, setup_probes, start_probes, ReportCollector};

/// Arguments for `chatprobe run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Return after all probes have started instead of waiting for Ctrl-C
    #[arg(long)]
    pub no_wait: bool,
}

/// Summary printed once every probe has started.
#[derive(Debug, Serialize)]
pub struct RunOutput {
    /// Always true; failures surface as errors instead
    pub success: bool,
    /// Monitored chat service
    pub host: String,
    /// `(name, kind)` in start order
    pub probes: Vec<(String, String)>,
}

impl CommandOutput for RunOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Started {} probe(s) against {}",
            self.probes.len(),
            self.host
        )];
        lines.extend(probe_lines(&self.probes));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Load config, log in both sessions, set up and start the probes, then
/// wait for Ctrl-C unless `--no-wait` is given.
pub async fn execute(args: RunArgs, config_path: Option<&Path>, json_mode: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let _logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;

    let client1 = http_client(&config)?;
    let client2 = http_client(&config)?;

    if config.any_probe_enabled() {
        client1
            .login(&config.user_a.username, &config.user_a.password)
            .await
            .with_context(|| format!("Failed to log in as {}", config.user_a.username))?;
        client2
            .login(&config.user_b.username, &config.user_b.password)
            .await
            .with_context(|| format!("Failed to log in as {}", config.user_b.username))?;
    } else {
        tracing::warn!("No probes enabled; nothing to run");
    }

    let (sink, rx) = ReportSink::channel();
    let collector = ReportCollector::new();
    let collector_handle = collector.spawn(rx);

    let mut probes = build_probes(&config, &sink, &as_dyn(&client1), &as_dyn(&client2));
    // Only the producer probes keep the channel open from here on.
    drop(sink);

    let log = TracingLogger::new();
    setup_probes(&mut probes, &log)
        .await
        .context("Probe setup failed")?;
    start_probes(&mut probes, &log)
        .await
        .context("Probe start failed")?;

    let output_data = RunOutput {
        success: true,
        host: config.host.clone(),
        probes: probes
            .iter()
            .map(|p| (p.name(), p.kind().to_string()))
            .collect(),
    };
    output(&output_data, json_mode);

    if args.no_wait {
        return Ok(());
    }

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    for ((probe, metric), stats) in collector.snapshot().await {
        tracing::info!(
            probe = %probe,
            metric = %metric,
            successes = stats.successes,
            failures = stats.failures,
            "Final report totals"
        );
    }
    tracing::info!("Shutting down");
    collector_handle.abort();
    Ok(())
}
