// Integration tests for logging functionality
// Note: this test installs the global subscriber, so it lives in its own
// test binary.

use chatprobe::domain::ports::Probe;
use chatprobe::infrastructure::logging::{
    LogConfig, LogFormat, LoggerImpl, RotationPolicy, LOG_FILE_NAME,
};
use chatprobe::{setup_probes, start_probes, ProbeError, ProbeKind, TracingLogger};
use std::fs;
use tempfile::TempDir;

struct DeadProbe;

#[async_trait::async_trait]
impl Probe for DeadProbe {
    fn name(&self) -> String {
        "dead-probe".to_string()
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::Ping
    }

    async fn setup(&mut self) -> Result<(), ProbeError> {
        Ok(())
    }

    async fn start(&mut self) -> Result<(), ProbeError> {
        Err(ProbeError::Start("no route to host".to_string()))
    }
}

#[test]
fn test_lifecycle_narration_reaches_log_file() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        enable_stdout: false,
        rotation: RotationPolicy::Never,
    };

    let logger = LoggerImpl::init(&config).unwrap();
    assert!(logger.has_file_output());

    // A second global subscriber is refused.
    assert!(LoggerImpl::init(&LogConfig::default()).is_err());

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let err = runtime.block_on(async {
        let log = TracingLogger::new();
        let mut probes: Vec<Box<dyn Probe>> = vec![Box::new(DeadProbe)];
        setup_probes(&mut probes, &log).await.unwrap();
        start_probes(&mut probes, &log).await.unwrap_err()
    });
    assert_eq!(err.to_string(), "could not start probe dead-probe");

    // Dropping the guard flushes the non-blocking writer.
    drop(logger);

    let contents = fs::read_to_string(temp_dir.path().join(LOG_FILE_NAME)).unwrap();

    assert!(contents.contains("logger initialized"));
    assert!(contents.contains("Setting up probe: dead-probe"));
    assert!(contents.contains("Starting probe: dead-probe"));
    assert!(contents.contains("no route to host"));
    assert!(contents.contains("chatprobe::lifecycle"));

    for line in contents.lines().filter(|l| !l.trim().is_empty()) {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("level").is_some(), "JSON line without level");
    }
}
