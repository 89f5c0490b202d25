// lock-churn-core/src/lib.rs
// ============================================================================
// Module: Lock Churn Core
// Description: Worker coordination for SQLite write-lock contention stress.
// Purpose: Validate engine-level locking under concurrent insert/purge/count.
// Dependencies: rand, rusqlite, serde, thiserror, time
// ============================================================================

//! ## Overview
//! This crate drives a configurable fleet of writer and reader workers
//! against a single shared `SQLite` file. Writers insert batches of random
//! guids and purge the table; readers hammer it with count scans. The
//! harness holds no locks of its own: the engine's locking is the system
//! under test, and every connection is pinned to exactly one worker thread.
//! The first worker to finish (normally or on error) triggers cooperative
//! cancellation of the whole fleet.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod cancel;
pub mod connection;
pub mod guid;
pub mod log;
pub mod pool;
pub mod worker;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use cancel::CancellationSignal;
pub use connection::HarnessError;
pub use connection::MAX_LOCK_WAIT_MS;
pub use connection::StressDbConfig;
pub use connection::open_connection;
pub use guid::random_guid;
pub use log::EventLog;
pub use log::LogSink;
pub use log::StdoutSink;
pub use pool::PoolError;
pub use pool::WorkerPool;
pub use worker::BATCH_SIZE;
pub use worker::count_records;
pub use worker::purge;
pub use worker::run_reader;
pub use worker::run_writer;
