//! Domain layer for chatprobe
//!
//! This module contains the probe contract, the configuration and report
//! models, and the ports the core depends on.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{LifecyclePhase, OrchestrationError, ProbeError};
