//! Output formatting utilities for the CLI.

use serde::Serialize;

/// Command result that can render for humans or as JSON.
pub trait CommandOutput: Serialize {
    /// Plain-text rendering
    fn to_human(&self) -> String;
    /// JSON rendering
    fn to_json(&self) -> serde_json::Value;
}

/// Print `result` in the selected format.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// One line per probe, `  - name (kind)`.
pub fn probe_lines(probes: &[(String, String)]) -> Vec<String> {
    probes
        .iter()
        .map(|(name, kind)| format!("  - {name} ({kind})"))
        .collect()
}
