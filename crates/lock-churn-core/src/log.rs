// lock-churn-core/src/log.rs
// ============================================================================
// Module: Event Log
// Description: Timestamped, worker-tagged, line-oriented log output.
// Purpose: Trace inserts, resets, counts, and failures per worker.
// Dependencies: time
// ============================================================================

//! ## Overview
//! Every event is one line: a two-digit zero-padded worker id, a
//! `MM/dd/yyyy HH:mm:ss.fff` UTC timestamp, and the message, tab-separated.
//! Worker id 0 is the coordinator; workers are numbered from 1 in spawn
//! order. The sink is a trait seam so tests can capture lines; production
//! output goes to stdout. Log output is best-effort: an I/O failure on the
//! sink never terminates a worker.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Arc;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Timestamp layout for log lines (`MM/dd/yyyy HH:mm:ss.fff`).
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'_>] = format_description!(
    "[month]/[day]/[year] [hour]:[minute]:[second].[subsecond digits:3]"
);

// ============================================================================
// SECTION: Sink
// ============================================================================

/// Destination for formatted log lines.
pub trait LogSink: Send + Sync {
    /// Writes one formatted line.
    fn write_line(&self, line: &str);
}

/// Production sink writing lines to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(&mut stdout, "{line}");
    }
}

// ============================================================================
// SECTION: Event Log
// ============================================================================

/// Cloneable, worker-tagged logging handle.
#[derive(Clone)]
pub struct EventLog {
    /// Worker id rendered at the start of every line.
    worker: u32,
    /// Shared line sink.
    sink: Arc<dyn LogSink>,
}

impl EventLog {
    /// Creates a coordinator log (worker id 0) over `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            worker: 0,
            sink,
        }
    }

    /// Creates a coordinator log writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Arc::new(StdoutSink))
    }

    /// Derives a handle tagged with `worker`.
    #[must_use]
    pub fn tagged(&self, worker: u32) -> Self {
        Self {
            worker,
            sink: Arc::clone(&self.sink),
        }
    }

    /// Writes one tagged, timestamped line.
    pub fn line(&self, message: &str) {
        let timestamp = OffsetDateTime::now_utc()
            .format(&TIMESTAMP_FORMAT)
            .unwrap_or_default();
        self.sink.write_line(&format!("{:02}\t{timestamp}\t{message}", self.worker));
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
