// lock-churn-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Fixtures
// Description: Shared sinks and database fixtures for harness tests.
// Purpose: Provide deterministic log capture and cancellation triggers.
// Dependencies: lock-churn-core, tempfile
// ============================================================================

//! ## Overview
//! Test doubles for the harness log seam: a capturing sink for line
//! assertions and a trigger sink that latches the cancellation signal when
//! a matching line is observed, which pins worker loops to exact iteration
//! counts without timing assumptions.

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;

use lock_churn_core::CancellationSignal;
use lock_churn_core::LogSink;
use lock_churn_core::StressDbConfig;

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Sink capturing every line for assertions.
#[derive(Default)]
pub struct CaptureSink {
    /// Captured lines in write order.
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    /// Returns a snapshot of the captured lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }
}

impl LogSink for CaptureSink {
    fn write_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

/// Sink that requests cancellation when a line contains the needle.
pub struct TriggerSink {
    /// Substring that latches the signal.
    needle: String,
    /// Signal shared with the worker under test.
    signal: CancellationSignal,
    /// Captured lines for follow-up assertions.
    capture: CaptureSink,
}

impl TriggerSink {
    /// Creates a trigger sink latching `signal` on `needle`.
    pub fn new(needle: impl Into<String>, signal: CancellationSignal) -> Self {
        Self {
            needle: needle.into(),
            signal,
            capture: CaptureSink::default(),
        }
    }

    /// Returns a snapshot of the captured lines.
    pub fn lines(&self) -> Vec<String> {
        self.capture.lines()
    }
}

impl LogSink for TriggerSink {
    fn write_line(&self, line: &str) {
        self.capture.write_line(line);
        if line.contains(&self.needle) {
            self.signal.request();
        }
    }
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Builds a database config rooted in a temp directory.
pub fn db_config(dir: &Path) -> StressDbConfig {
    StressDbConfig::new(dir.join("stress.sqlite"))
}

/// Wraps a sink in the shared-pointer shape the log expects.
pub fn shared<S: LogSink + 'static>(sink: S) -> Arc<S> {
    Arc::new(sink)
}
