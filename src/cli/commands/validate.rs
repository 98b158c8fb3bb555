//! Implementation of the `chatprobe validate` command.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::{as_dyn, http_client, load_config};
use crate::cli::output::{output, probe_lines, CommandOutput};
use crate::domain::models::report::ReportSink;
use crate::services::build_probes;

/// Arguments for `chatprobe validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {}

/// Result of a successful validation.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    /// Always true; invalid config surfaces as an error instead
    pub success: bool,
    /// Monitored chat service
    pub host: String,
    /// `(name, kind)` in setup order
    pub probes: Vec<(String, String)>,
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("Configuration is valid for {}", self.host)];
        if self.probes.is_empty() {
            lines.push("No probes enabled".to_string());
        } else {
            lines.push(format!("\n{} probe(s) in setup order:", self.probes.len()));
            lines.extend(probe_lines(&self.probes));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Load and validate config and list the probes it would build.
pub fn execute(_args: &ValidateArgs, config_path: Option<&Path>, json_mode: bool) -> Result<()> {
    let config = load_config(config_path)?;

    // Construction performs no I/O, so unauthenticated clients are enough.
    let client = http_client(&config)?;
    let (sink, _rx) = ReportSink::channel();
    let probes = build_probes(&config, &sink, &as_dyn(&client), &as_dyn(&client));

    let output_data = ValidateOutput {
        success: true,
        host: config.host.clone(),
        probes: probes
            .iter()
            .map(|p| (p.name(), p.kind().to_string()))
            .collect(),
    };
    output(&output_data, json_mode);
    Ok(())
}
