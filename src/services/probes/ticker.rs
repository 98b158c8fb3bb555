//! Detached periodic execution shared by the probe variants.

use std::future::Future;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::MissedTickBehavior;

use crate::domain::errors::ProbeError;

/// Spawn `tick` every `frequency` on the current tokio runtime.
///
/// The first tick runs immediately. The task is detached: it runs until the
/// runtime shuts down. Fails when `frequency` is zero or when called outside
/// a runtime.
pub fn spawn_periodic<F, Fut>(
    probe: String,
    frequency: Duration,
    mut tick: F,
) -> Result<(), ProbeError>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    if frequency.is_zero() {
        return Err(ProbeError::Start("frequency must be non-zero".to_string()));
    }

    let handle = Handle::try_current()
        .map_err(|e| ProbeError::Start(format!("no async runtime available: {e}")))?;

    handle.spawn(async move {
        let mut interval = tokio::time::interval(frequency);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::debug!(
            probe = %probe,
            frequency_secs = frequency.as_secs(),
            "Probe loop started"
        );

        loop {
            interval.tick().await;
            tick().await;
        }
    });

    Ok(())
}

/// Error returned by `start` when `setup` has not succeeded.
pub fn not_set_up() -> ProbeError {
    ProbeError::Start("probe has not been set up".to_string())
}
