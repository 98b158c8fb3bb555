//! Integration tests for probe selection and wiring.

mod common;

use chatprobe::domain::models::report::{ReportMetric, ReportSink};
use chatprobe::domain::ports::ProbeKind;
use chatprobe::{build_probes, setup_probes, start_probes};
use common::{FakeChatClient, RecordingLogger, ALL_KINDS};
use proptest::prelude::*;

#[test]
fn test_nothing_enabled_builds_nothing() {
    let (client1, client2) = FakeChatClient::pair();
    let (sink, _rx) = ReportSink::channel();

    let probes = build_probes(
        &common::base_config(),
        &sink,
        &client1.as_dyn(),
        &client2.as_dyn(),
    );

    assert!(probes.is_empty());
}

#[test]
fn test_single_variant_builds_only_that_variant() {
    for kind in ALL_KINDS {
        let (client1, client2) = FakeChatClient::pair();
        let (sink, _rx) = ReportSink::channel();

        let probes = build_probes(
            &common::single_probe_config(kind),
            &sink,
            &client1.as_dyn(),
            &client2.as_dyn(),
        );

        let expected_len = if kind == ProbeKind::Login { 2 } else { 1 };
        assert_eq!(probes.len(), expected_len, "probe count for {kind}");
        assert!(
            probes.iter().all(|p| p.kind() == kind),
            "only {kind} probes expected"
        );
    }
}

#[test]
fn test_all_enabled_follows_declaration_order() {
    let (client1, client2) = FakeChatClient::pair();
    let (sink, _rx) = ReportSink::channel();

    let probes = build_probes(
        &common::all_enabled_config(),
        &sink,
        &client1.as_dyn(),
        &client2.as_dyn(),
    );

    let names: Vec<String> = probes.iter().map(|p| p.name()).collect();
    assert_eq!(
        names,
        vec![
            "broadcast-probe",
            "channel-join-probe",
            "ping-probe",
            "search-probe",
            "login-probe(alice)",
            "login-probe(bob)",
            "api-ping-probe",
        ]
    );
}

#[test]
fn test_build_performs_no_io() {
    let (client1, client2) = FakeChatClient::pair();
    let (sink, mut rx) = ReportSink::channel();

    let probes = build_probes(
        &common::all_enabled_config(),
        &sink,
        &client1.as_dyn(),
        &client2.as_dyn(),
    );

    assert_eq!(probes.len(), 7);
    assert!(client1.calls().is_empty());
    assert!(client2.calls().is_empty());
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_login_instances_are_bound_to_their_own_user_and_client() {
    let (client1, client2) = FakeChatClient::pair();
    let (sink, _rx) = ReportSink::channel();
    let log = RecordingLogger::default();

    let mut probes = build_probes(
        &common::single_probe_config(ProbeKind::Login),
        &sink,
        &client1.as_dyn(),
        &client2.as_dyn(),
    );
    assert_eq!(probes[0].name(), "login-probe(alice)");
    assert_eq!(probes[1].name(), "login-probe(bob)");

    setup_probes(&mut probes, &log).await.unwrap();

    assert_eq!(client1.calls(), vec!["login:alice"]);
    assert_eq!(client2.calls(), vec!["login:bob"]);
}

#[tokio::test]
async fn test_broadcast_speaks_through_client1_and_listens_through_client2() {
    let (client1, client2) = FakeChatClient::pair();
    let (sink, mut rx) = ReportSink::channel();
    let log = RecordingLogger::default();

    let mut probes = build_probes(
        &common::single_probe_config(ProbeKind::Broadcast),
        &sink,
        &client1.as_dyn(),
        &client2.as_dyn(),
    );
    setup_probes(&mut probes, &log).await.unwrap();
    start_probes(&mut probes, &log).await.unwrap();

    let report = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
        .await
        .expect("broadcast report")
        .expect("channel open");

    assert_eq!(report.probe, "broadcast-probe");
    assert_eq!(report.metric, ReportMetric::BroadcastDelivery);
    assert!(report.success);
    assert_eq!(client1.calls_to("create_post"), 1);
    assert_eq!(client2.calls_to("create_post"), 0);
    assert!(client2.calls_to("get_posts_since") >= 1);
    assert_eq!(client1.calls_to("get_posts_since"), 0);
}

#[tokio::test]
async fn test_search_reports_into_shared_sink() {
    let (client1, client2) = FakeChatClient::pair();
    let (sink, mut rx) = ReportSink::channel();
    let log = RecordingLogger::default();

    let mut probes = build_probes(
        &common::single_probe_config(ProbeKind::Search),
        &sink,
        &client1.as_dyn(),
        &client2.as_dyn(),
    );
    setup_probes(&mut probes, &log).await.unwrap();
    start_probes(&mut probes, &log).await.unwrap();

    let report = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
        .await
        .expect("search report")
        .expect("channel open");

    assert_eq!(report.probe, "search-probe");
    assert_eq!(report.metric, ReportMetric::SearchLatency);
    assert!(client2.calls().is_empty());
}

proptest! {
    #[test]
    fn prop_enabled_flags_determine_probe_sequence(flags in proptest::array::uniform6(any::<bool>())) {
        let mut config = common::base_config();
        config.broadcast_probe.enabled = flags[0];
        config.channel_join_probe.enabled = flags[1];
        config.ping_probe.enabled = flags[2];
        config.search_probe.enabled = flags[3];
        config.login_probe.enabled = flags[4];
        config.api_ping_probe.enabled = flags[5];

        let (client1, client2) = FakeChatClient::pair();
        let (sink, _rx) = ReportSink::channel();
        let probes = build_probes(&config, &sink, &client1.as_dyn(), &client2.as_dyn());

        let mut expected = Vec::new();
        for (kind, enabled) in ALL_KINDS.iter().zip(flags) {
            if enabled {
                expected.push(*kind);
                if *kind == ProbeKind::Login {
                    expected.push(*kind);
                }
            }
        }

        let kinds: Vec<ProbeKind> = probes.iter().map(|p| p.kind()).collect();
        prop_assert_eq!(kinds, expected);
        prop_assert!(client1.calls().is_empty());
        prop_assert!(client2.calls().is_empty());
    }
}
