// lock-churn-cli/src/main.rs
// ============================================================================
// Module: Lock Churn CLI Entry Point
// Description: Wires the worker pool to process arguments and stdin pause.
// Purpose: Run the SQLite contention stress fleet until first completion.
// Dependencies: clap, lock-churn-core
// ============================================================================

//! ## Overview
//! The CLI spawns the configured writer and reader fleet against one shared
//! database file and blocks until the first worker finishes, which cancels
//! the rest. Worker errors surface only as log lines; after the fleet is
//! joined the process pauses for an operator acknowledgment on stdin and
//! then exits successfully.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use clap::ArgAction;
use clap::Parser;
use lock_churn_core::CancellationSignal;
use lock_churn_core::EventLog;
use lock_churn_core::MAX_LOCK_WAIT_MS;
use lock_churn_core::StressDbConfig;
use lock_churn_core::WorkerPool;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "lock-churn", version, about = "SQLite write-lock contention stress harness")]
struct Cli {
    /// Path to the shared `SQLite` database file (created when absent).
    #[arg(long, value_name = "PATH", default_value = "lock-churn.sqlite")]
    database: PathBuf,
    /// Number of writer workers (defaults to available parallelism).
    #[arg(long, value_name = "COUNT")]
    writers: Option<u32>,
    /// Number of reader workers (defaults to available parallelism).
    #[arg(long, value_name = "COUNT")]
    readers: Option<u32>,
    /// Maximum lock wait in milliseconds before contention surfaces.
    #[arg(long, value_name = "MS", default_value_t = MAX_LOCK_WAIT_MS)]
    max_lock_wait_ms: u64,
    /// Exit without pausing for acknowledgment after cancellation.
    #[arg(long, action = ArgAction::SetTrue)]
    no_pause: bool,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    run(Cli::parse())
}

/// Runs the fleet and the shutdown/pause sequence.
fn run(cli: Cli) -> ExitCode {
    let parallelism = default_worker_count();
    let writers = cli.writers.unwrap_or(parallelism);
    let readers = cli.readers.unwrap_or(parallelism);
    let config = StressDbConfig {
        path: cli.database,
        max_lock_wait_ms: cli.max_lock_wait_ms,
    };

    let log = EventLog::stdout();
    let signal = CancellationSignal::new();
    let pool = WorkerPool::new(config, writers, readers);
    if let Err(err) = pool.run(&signal, &log) {
        log.line(&err.to_string());
    }

    log.line(">>> Tasks cancelled. Program paused.");
    if !cli.no_pause {
        wait_for_acknowledgment();
    }
    ExitCode::SUCCESS
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the default worker count per role (one per available CPU).
fn default_worker_count() -> u32 {
    thread::available_parallelism()
        .map_or(1, |count| u32::try_from(count.get()).unwrap_or(u32::MAX))
}

/// Blocks until the operator acknowledges shutdown on stdin.
fn wait_for_acknowledgment() {
    let mut line = String::new();
    // EOF counts as acknowledgment; shutdown must not wedge on a closed pipe.
    let _ = std::io::stdin().read_line(&mut line);
}
