//! Builds the ordered probe collection from configuration.

use std::sync::Arc;

use crate::domain::models::config::Config;
use crate::domain::models::report::ReportSink;
use crate::domain::ports::{ChatClient, Probe};
use crate::services::probes::{
    ApiPingProbe, BroadcastProbe, ChannelJoinProbe, LoginProbe, PingProbe, SearchProbe,
};

/// Construct every enabled probe, wired to its collaborators.
///
/// Probes appear in configuration declaration order: broadcast,
/// channel-join, ping, search, login, api-ping. That order is the setup and
/// start order, so the broadcaster is prepared before any consumer.
///
/// * broadcast posts through `client1` and listens through `client2`;
/// * broadcast and search receive a clone of `report_sink`;
/// * login is built twice, `(user_a, client1)` then `(user_b, client2)`;
/// * everything else uses `client1` only.
///
/// Performs no I/O and never calls `setup` or `start`. Returns an empty
/// vector when nothing is enabled.
pub fn build_probes(
    config: &Config,
    report_sink: &ReportSink,
    client1: &Arc<dyn ChatClient>,
    client2: &Arc<dyn ChatClient>,
) -> Vec<Box<dyn Probe>> {
    let mut probes: Vec<Box<dyn Probe>> = Vec::new();

    if config.broadcast_probe.enabled {
        probes.push(Box::new(BroadcastProbe::new(
            config.broadcast_probe.clone(),
            client1.clone(),
            client2.clone(),
            report_sink.clone(),
        )));
    }

    if config.channel_join_probe.enabled {
        probes.push(Box::new(ChannelJoinProbe::new(
            config.channel_join_probe.clone(),
            client1.clone(),
        )));
    }

    if config.ping_probe.enabled {
        probes.push(Box::new(PingProbe::new(
            config.ping_probe.clone(),
            client1.clone(),
        )));
    }

    if config.search_probe.enabled {
        probes.push(Box::new(SearchProbe::new(
            config.search_probe.clone(),
            client1.clone(),
            report_sink.clone(),
        )));
    }

    if config.login_probe.enabled {
        probes.push(Box::new(LoginProbe::new(
            config.login_probe.clone(),
            client1.clone(),
            config.user_a.clone(),
        )));
        probes.push(Box::new(LoginProbe::new(
            config.login_probe.clone(),
            client2.clone(),
            config.user_b.clone(),
        )));
    }

    if config.api_ping_probe.enabled {
        probes.push(Box::new(ApiPingProbe::new(
            config.api_ping_probe.clone(),
            client1.clone(),
        )));
    }

    tracing::debug!(probe_count = probes.len(), "Built probes");
    probes
}
