//! Integration tests for the logging pipeline
//!
//! These tests verify:
//! - Logger naming from the calling file
//! - End-to-end line layout through the registry
//! - Threshold gating and silencing
//! - Warning and error sink routing
//! - Sink failures surfacing as errors
//! - File output

use glog::prelude::*;
use glog::{critical, debug, error, info, warn};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

const LAYOUT: &str = "%(n)20s | %(f)30s() | %(l)8s | %(m)s";

fn registry_with(sink: &MemorySink, level: LogLevel) -> Registry {
    Registry::with_config(
        Config::builder()
            .format(LAYOUT)
            .date_format("%b %d %H:%M:%S")
            .level(level)
            .handler(sink.clone())
            .build(),
    )
}

fn expected_line(function: &str, level: &str, message: &str) -> String {
    format!("{:>20} | {:>30}() | {:>8} | {}", "glog_test", function, level, message)
}

#[test]
fn test_get_log() {
    let registry = Registry::with_config(Config::builder().build());
    let log = glog::get_log!(registry);
    assert_eq!(log.name(), "glog_test");
}

#[test]
fn test_logging() {
    let sink = MemorySink::new();
    let registry = registry_with(&sink, LogLevel::DEBUG);
    let log = glog::get_log!(registry);

    debug!(log, "Debug Test").unwrap();
    info!(log, "Info Test").unwrap();
    warn!(log, "Warning Test").unwrap();
    error!(log, "Error Test").unwrap();
    critical!(log, "Critical Test").unwrap();

    let function = "glog_test::test_logging";
    let expected: String = [
        expected_line(function, "DEBUG", "Debug Test"),
        expected_line(function, "INFO", "Info Test"),
        expected_line(function, "WARN", "Warning Test"),
        expected_line(function, "ERROR", "Error Test"),
        expected_line(function, "CRITICAL", "Critical Test"),
    ]
    .iter()
    .map(|line| format!("{}\n", line))
    .collect();

    assert_eq!(sink.contents(), expected);

    let first = sink.lines().remove(0);
    assert!(first.contains("|    DEBUG | Debug Test"), "got {}", first);
    assert!(first.starts_with("           glog_test |"), "got {}", first);

    sink.clear();
    debug!(log, "Debug {}", "Test").unwrap();
    info!(log, "Info {}", "Test").unwrap();
    warn!(log, "Warning {}", "Test").unwrap();
    error!(log, "Error {}", "Test").unwrap();
    critical!(log, "Critical {}", "Test").unwrap();

    assert_eq!(sink.contents(), expected);
}

#[test]
fn test_fetch_log() {
    let registry = Registry::with_config(Config::builder().build());
    assert!(registry.fetch_log("").is_none());
    assert!(registry.fetch_log("glog_test").is_none());

    let log = glog::get_log!(registry);
    let fetched = registry.fetch_log("glog_test").expect("logger was created");
    assert!(Arc::ptr_eq(&log, &fetched));
}

#[test]
fn test_threshold_debug() {
    let sink = MemorySink::new();
    let registry = registry_with(&sink, LogLevel::DEBUG);
    let log = registry.logger("gate");

    for level in LogLevel::ALL {
        glog::log!(log, level, "at {}", level).unwrap();
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|line| !line.ends_with("at NOTSET")));
}

#[test]
fn test_threshold_warning() {
    let sink = MemorySink::new();
    let registry = registry_with(&sink, LogLevel::WARNING);
    let log = registry.logger("gate");

    debug!(log, "no").unwrap();
    info!(log, "no").unwrap();
    warn!(log, "yes").unwrap();
    error!(log, "yes").unwrap();
    critical!(log, "yes").unwrap();

    assert_eq!(sink.lines().len(), 3);
    assert_eq!(log.metrics().suppressed_count(), 2);
}

#[test]
fn test_silenced_logger_writes_nothing() {
    let sink = MemorySink::new();
    let registry = registry_with(&sink, LogLevel::NOTSET);
    let log = glog::get_log!(registry);

    log.silence(true);
    for level in LogLevel::ALL {
        glog::log!(log, level, "silenced").unwrap();
    }
    assert!(sink.is_empty());

    log.silence(false);
    info!(log, "audible").unwrap();
    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn test_sink_routing() {
    let general = MemorySink::new();
    let warnings = MemorySink::new();
    let errors = MemorySink::new();

    let registry = Registry::with_config(
        Config::builder()
            .format("%(l)s %(m)s")
            .handler(general.clone())
            .warning_handler(warnings.clone())
            .error_handler(errors.clone())
            .build(),
    );
    let log = registry.logger("router");

    debug!(log, "d").unwrap();
    info!(log, "i").unwrap();
    warn!(log, "w").unwrap();
    error!(log, "e").unwrap();
    critical!(log, "c").unwrap();

    assert_eq!(general.contents(), "DEBUG d\nINFO i\n");
    assert_eq!(warnings.contents(), "WARN w\n");
    assert_eq!(errors.contents(), "ERROR e\nCRITICAL c\n");
}

#[test]
fn test_sink_routing_fallback() {
    let general = MemorySink::new();
    let errors = MemorySink::new();

    let registry = Registry::with_config(
        Config::builder()
            .format("%(l)s %(m)s")
            .handler(general.clone())
            .error_handler(errors.clone())
            .build(),
    );
    let log = registry.logger("router");

    warn!(log, "w").unwrap();
    critical!(log, "c").unwrap();

    assert_eq!(general.contents(), "WARN w\n");
    assert_eq!(errors.contents(), "CRITICAL c\n");
}

#[test]
fn test_sink_failure_is_returned() {
    struct ClosedPipe;

    impl Sink for ClosedPipe {
        fn write(&self, _line: &[u8]) -> glog::Result<()> {
            Err(LoggerError::sink_write(
                self.name(),
                std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
            ))
        }

        fn name(&self) -> &str {
            "closed-pipe"
        }
    }

    let after = MemorySink::new();
    let registry = Registry::with_config(
        Config::builder()
            .handler(ClosedPipe)
            .handler(after.clone())
            .build(),
    );
    let log = registry.logger("failing");

    let err = error!(log, "lost").unwrap_err();
    assert_eq!(err.to_string(), "Write to sink 'closed-pipe' failed: closed");
    assert!(after.is_empty());
    assert_eq!(log.metrics().failed_count(), 1);
}

#[test]
fn test_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let registry = Registry::with_config(
        Config::builder()
            .format("%(t)s %(l)s %(m)s")
            .date_format("%Y-%m-%d")
            .handler(FileSink::new(&log_file).expect("Failed to create sink"))
            .build(),
    );
    let log = registry.logger("file");

    for i in 0..5 {
        info!(log, "Message {}", i).unwrap();
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[4].ends_with("INFO Message 4"));
}

#[test]
fn test_reconfigure_from_settings() {
    let sink = MemorySink::new();
    let registry = registry_with(&sink, LogLevel::NOTSET);
    let log = registry.logger("settings");

    let settings = Settings::from_json(r#"{"format": "%(l)s|%(m)s", "level": "error"}"#).unwrap();
    registry.config().update(|config| config.apply(settings));

    info!(log, "dropped").unwrap();
    error!(log, "kept").unwrap();

    assert_eq!(sink.contents(), "ERROR|kept\n");
}

#[test]
fn test_shared_sink_in_several_lists() {
    let sink = Arc::new(MemorySink::new());
    let registry = Registry::with_config(
        Config::builder()
            .format("%(m)s")
            .handler_shared(sink.clone())
            .error_handler_shared(sink.clone())
            .build(),
    );
    let log = registry.logger("shared");

    info!(log, "general").unwrap();
    error!(log, "error").unwrap();

    assert_eq!(sink.contents(), "general\nerror\n");
}
