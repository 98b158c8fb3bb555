//! Service layer
//!
//! - `probes`: the probe variants
//! - `probe_factory`: selects and wires probes from configuration
//! - `probe_lifecycle`: fail-fast setup and start passes
//! - `report_collector`: drains the shared report channel

pub mod probe_factory;
pub mod probe_lifecycle;
pub mod probes;
pub mod report_collector;

pub use probe_factory::build_probes;
pub use probe_lifecycle::{setup_probes, start_probes};
pub use report_collector::{ReportCollector, ReportStats};
