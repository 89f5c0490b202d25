// lock-churn-core/src/pool.rs
// ============================================================================
// Module: Worker Pool
// Description: Spawns the worker fleet and propagates cancellation.
// Purpose: Fan out long-lived workers; cancel all on first completion.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! The pool spawns one dedicated thread per worker. Workers block
//! indefinitely inside storage calls, so they get real threads rather than
//! slots in a bounded task pool. Each thread opens its own connection, runs
//! its loop, logs any error at the boundary, and reports completion over an
//! mpsc channel. The coordinator blocks on the first completion report,
//! latches the shared cancellation signal exactly once, and joins every
//! thread. A panicking worker is observed at join and logged; it never
//! aborts the process.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::mpsc;
use std::thread;
use std::thread::JoinHandle;

use thiserror::Error;

use crate::cancel::CancellationSignal;
use crate::connection::StressDbConfig;
use crate::connection::open_connection;
use crate::log::EventLog;
use crate::worker::run_reader;
use crate::worker::run_writer;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Worker pool startup errors.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The host refused to start a worker thread.
    #[error("worker spawn failed: {0}")]
    Spawn(String),
}

// ============================================================================
// SECTION: Roles
// ============================================================================

/// Worker role assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    /// Insert/purge cycle.
    Writer,
    /// Count scan cycle.
    Reader,
}

impl Role {
    /// Returns the thread-name label for the role.
    const fn label(self) -> &'static str {
        match self {
            Self::Writer => "writer",
            Self::Reader => "reader",
        }
    }
}

// ============================================================================
// SECTION: Pool
// ============================================================================

/// Coordinator for a fleet of writer and reader workers.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    /// Shared database configuration handed to every worker.
    config: StressDbConfig,
    /// Number of writer workers.
    writers: u32,
    /// Number of reader workers.
    readers: u32,
}

impl WorkerPool {
    /// Creates a pool of `writers` writer and `readers` reader workers.
    #[must_use]
    pub const fn new(config: StressDbConfig, writers: u32, readers: u32) -> Self {
        Self {
            config,
            writers,
            readers,
        }
    }

    /// Runs the fleet until the first worker finishes, then cancels and
    /// joins the rest.
    ///
    /// Worker ids are assigned in spawn order starting at 1: writers first,
    /// then readers. Worker errors are logged inside the worker and treated
    /// as ordinary completions.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Spawn`] when a worker thread cannot be started;
    /// already-running workers are cancelled and joined first.
    pub fn run(&self, signal: &CancellationSignal, log: &EventLog) -> Result<(), PoolError> {
        let (done_tx, done_rx) = mpsc::channel::<u32>();
        let total = self.writers.saturating_add(self.readers);
        let mut handles: Vec<JoinHandle<()>> = Vec::new();

        for id in 1..=total {
            let role = if id <= self.writers { Role::Writer } else { Role::Reader };
            match self.spawn_worker(id, role, signal, log, &done_tx) {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    signal.request();
                    join_all(handles, log);
                    return Err(err);
                }
            }
        }
        drop(done_tx);

        if let Ok(first) = done_rx.recv() {
            log.line(&format!("Worker {first:02} finished; cancelling all workers"));
        }
        signal.request();
        join_all(handles, log);
        Ok(())
    }

    /// Spawns one worker thread pinned to its own connection.
    fn spawn_worker(
        &self,
        id: u32,
        role: Role,
        signal: &CancellationSignal,
        log: &EventLog,
        done_tx: &mpsc::Sender<u32>,
    ) -> Result<JoinHandle<()>, PoolError> {
        let config = self.config.clone();
        let signal = signal.clone();
        let worker_log = log.tagged(id);
        let done = done_tx.clone();
        thread::Builder::new()
            .name(format!("{}-{id:02}", role.label()))
            .spawn(move || {
                let result = open_connection(&config).and_then(|connection| match role {
                    Role::Writer => run_writer(&connection, &signal, &worker_log),
                    Role::Reader => run_reader(&connection, &signal, &worker_log),
                });
                if let Err(err) = result {
                    worker_log.line(&err.to_string());
                }
                // The receiver outlives every worker; a send failure only
                // means the coordinator already gave up on the run.
                let _ = done.send(id);
            })
            .map_err(|err| PoolError::Spawn(err.to_string()))
    }
}

/// Joins every worker thread, logging any that panicked.
fn join_all(handles: Vec<JoinHandle<()>>, log: &EventLog) {
    for handle in handles {
        let name = handle.thread().name().unwrap_or("worker").to_string();
        if handle.join().is_err() {
            log.line(&format!("Worker thread {name} panicked"));
        }
    }
}
