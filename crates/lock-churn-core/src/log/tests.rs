// lock-churn-core/src/log/tests.rs
// ============================================================================
// Module: Event Log Tests
// Description: Unit tests for line formatting and worker tagging.
// Purpose: Validate the tab-separated id/timestamp/message layout.
// Dependencies: lock-churn-core
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

use std::sync::Arc;
use std::sync::Mutex;

use super::EventLog;
use super::LogSink;

/// Sink capturing lines for assertions.
#[derive(Default)]
struct CaptureSink {
    /// Captured lines in write order.
    lines: Mutex<Vec<String>>,
}

impl LogSink for CaptureSink {
    fn write_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

#[test]
fn line_is_tab_separated_and_worker_tagged() {
    let sink = Arc::new(CaptureSink::default());
    let log = EventLog::new(sink.clone()).tagged(7);
    log.line("Resetting");
    let lines = sink.lines.lock().unwrap();
    let parts: Vec<&str> = lines[0].split('\t').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "07");
    assert_eq!(parts[2], "Resetting");
}

#[test]
fn coordinator_log_is_worker_zero() {
    let sink = Arc::new(CaptureSink::default());
    let log = EventLog::new(sink.clone());
    log.line(">>> Tasks cancelled. Program paused.");
    let lines = sink.lines.lock().unwrap();
    assert!(lines[0].starts_with("00\t"));
}

#[test]
fn timestamp_matches_expected_layout() {
    let sink = Arc::new(CaptureSink::default());
    let log = EventLog::new(sink.clone());
    log.line("check");
    let lines = sink.lines.lock().unwrap();
    let timestamp = lines[0].split('\t').nth(1).unwrap();
    // MM/dd/yyyy HH:mm:ss.fff
    assert_eq!(timestamp.len(), 23);
    assert_eq!(&timestamp[2..3], "/");
    assert_eq!(&timestamp[5..6], "/");
    assert_eq!(&timestamp[10..11], " ");
    assert_eq!(&timestamp[19..20], ".");
}
