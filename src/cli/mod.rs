//! Command-line interface.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::run::RunArgs;
use commands::validate::ValidateArgs;

/// Top-level command line.
#[derive(Parser)]
#[command(name = "chatprobe")]
#[command(about = "Chatprobe - synthetic monitoring for chat services", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the YAML config file (defaults to ./chatprobe.yaml)
    #[arg(short, long, global = true, env = "CHATPROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Set up and start every enabled probe, then run until interrupted
    Run(RunArgs),

    /// Load and validate the configuration and list the probes it enables
    Validate(ValidateArgs),
}

/// Print an error (with its cause chain) and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let causes: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
        let body = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": causes,
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
