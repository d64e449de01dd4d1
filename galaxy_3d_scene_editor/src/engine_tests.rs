//! Unit tests for engine.rs
//!
//! The logger is process-wide, so every test here is #[serial] and restores
//! the default logger before returning.

use super::*;
use crate::log::MemoryLogger;
use serial_test::serial;

#[test]
#[serial]
fn test_custom_logger_receives_entries() {
    let capture = MemoryLogger::new();
    Engine::set_logger(capture.clone());

    Engine::log(LogSeverity::Info, "galaxy3d::tests", "hello".to_string());
    Engine::log(LogSeverity::Warn, "galaxy3d::tests", "careful".to_string());

    let entries = capture.entries_from("galaxy3d::tests");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].severity, LogSeverity::Info);
    assert_eq!(entries[1].message, "careful");
    assert!(entries[0].file.is_none());

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_keeps_location() {
    let capture = MemoryLogger::new();
    Engine::set_logger(capture.clone());

    Engine::log_detailed(
        LogSeverity::Error,
        "galaxy3d::tests",
        "failure".to_string(),
        "scene.rs",
        12,
    );

    let entries = capture.entries_from("galaxy3d::tests");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file, Some("scene.rs"));
    assert_eq!(entries[0].line, Some(12));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_min_severity_filters_entries() {
    let capture = MemoryLogger::new();
    Engine::set_logger(capture.clone());
    Engine::set_min_severity(LogSeverity::Warn);

    Engine::log(LogSeverity::Debug, "galaxy3d::tests", "dropped".to_string());
    Engine::log(LogSeverity::Info, "galaxy3d::tests", "dropped too".to_string());
    Engine::log(LogSeverity::Error, "galaxy3d::tests", "kept".to_string());

    let entries = capture.entries_from("galaxy3d::tests");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "kept");

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_is_enabled_follows_threshold() {
    Engine::set_min_severity(LogSeverity::Trace);
    assert!(Engine::is_enabled(LogSeverity::Trace));

    Engine::set_min_severity(LogSeverity::Error);
    assert!(!Engine::is_enabled(LogSeverity::Warn));
    assert!(Engine::is_enabled(LogSeverity::Error));

    Engine::reset_logger();
    assert_eq!(Engine::min_severity(), DEFAULT_MIN_SEVERITY);
}

#[test]
#[serial]
fn test_macros_route_through_engine() {
    let capture = MemoryLogger::new();
    Engine::set_logger(capture.clone());
    Engine::set_min_severity(LogSeverity::Trace);

    crate::engine_trace!("galaxy3d::macros", "trace {}", 1);
    crate::engine_debug!("galaxy3d::macros", "debug {}", 2);
    crate::engine_info!("galaxy3d::macros", "info {}", 3);
    crate::engine_warn!("galaxy3d::macros", "warn {}", 4);
    crate::engine_error!("galaxy3d::macros", "error {}", 5);

    let entries = capture.entries_from("galaxy3d::macros");
    let severities: Vec<LogSeverity> = entries.iter().map(|e| e.severity).collect();
    assert_eq!(
        severities,
        vec![
            LogSeverity::Trace,
            LogSeverity::Debug,
            LogSeverity::Info,
            LogSeverity::Warn,
            LogSeverity::Error,
        ]
    );
    assert_eq!(entries[4].message, "error 5");
    assert!(entries[4].file.is_some());
    assert!(entries[3].file.is_none());

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_restores_default() {
    let capture = MemoryLogger::new();
    Engine::set_logger(capture.clone());
    Engine::reset_logger();

    Engine::log(LogSeverity::Info, "galaxy3d::tests", "to console".to_string());
    assert!(capture.entries_from("galaxy3d::tests").is_empty());
}
