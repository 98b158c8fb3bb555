//! Chatprobe - synthetic monitoring for chat services
//!
//! Chatprobe runs a configurable set of health-check probes against a chat
//! service, brings each through setup then start, and funnels the
//! measurements they produce into a shared report channel.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): probe contract, models, ports and errors
//! - **Service Layer** (`services`): probe variants, factory, lifecycle driver
//! - **Infrastructure Layer** (`infrastructure`): HTTP client, config, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use chatprobe::{build_probes, setup_probes, start_probes, ReportSink, TracingLogger};
//!
//! let (sink, rx) = ReportSink::channel();
//! let mut probes = build_probes(&config, &sink, &client1, &client2);
//! setup_probes(&mut probes, &TracingLogger::new()).await?;
//! start_probes(&mut probes, &TracingLogger::new()).await?;
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{Config, Report, ReportMetric, ReportSink};
pub use domain::ports::{ChatClient, ChatClientError, Logger, Probe, ProbeKind};
pub use domain::{LifecyclePhase, OrchestrationError, ProbeError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::TracingLogger;
pub use services::{build_probes, setup_probes, start_probes, ReportCollector};
