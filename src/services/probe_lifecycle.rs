//! Sequential, fail-fast setup and start passes over a probe collection.
//!
//! Probes may depend on side effects of earlier probes in the collection, so
//! each call is awaited before the next begins. The first failure ends the
//! pass; later probes are left untouched. Running `setup_probes` to
//! completion before `start_probes` is the caller's responsibility.

use crate::domain::errors::{LifecyclePhase, OrchestrationError, ProbeError};
use crate::domain::ports::{Logger, Probe};

/// Call `setup` on every probe in order.
///
/// # Errors
/// Returns the first failure, wrapped with the probe's name.
pub async fn setup_probes(
    probes: &mut [Box<dyn Probe>],
    log: &dyn Logger,
) -> Result<(), OrchestrationError> {
    for probe in probes.iter_mut() {
        let name = probe.name();
        log.info(&format!("Setting up probe: {name}")).await;
        if let Err(source) = probe.setup().await {
            return Err(fail(LifecyclePhase::Setup, name, source, log).await);
        }
    }
    Ok(())
}

/// Call `start` on every probe in order.
///
/// # Errors
/// Returns the first failure, wrapped with the probe's name.
pub async fn start_probes(
    probes: &mut [Box<dyn Probe>],
    log: &dyn Logger,
) -> Result<(), OrchestrationError> {
    for probe in probes.iter_mut() {
        let name = probe.name();
        log.info(&format!("Starting probe: {name}")).await;
        if let Err(source) = probe.start().await {
            return Err(fail(LifecyclePhase::Start, name, source, log).await);
        }
    }
    Ok(())
}

async fn fail(
    phase: LifecyclePhase,
    name: String,
    source: ProbeError,
    log: &dyn Logger,
) -> OrchestrationError {
    let err = OrchestrationError::new(phase, name, source);
    log.error(&format!("{err}: {}", err.source)).await;
    err
}
