// lock-churn-core/src/worker.rs
// ============================================================================
// Module: Stress Workers
// Description: Writer insert/purge loop and reader count loop.
// Purpose: Generate maximal write-lock churn and concurrent scan overlap.
// Dependencies: rusqlite
// ============================================================================

//! ## Overview
//! Writers insert a fixed batch of rows one autocommit statement at a time,
//! then purge the table and reclaim file space, oscillating the file size
//! and the engine's exclusive lock. Readers hammer the table with a
//! pattern-predicate count scan with no pacing. Both loops observe the
//! cancellation signal only at iteration boundaries; an in-flight statement
//! always completes first.

// ============================================================================
// SECTION: Imports
// ============================================================================

use rusqlite::Connection;
use rusqlite::params;

use crate::cancel::CancellationSignal;
use crate::connection::HarnessError;
use crate::guid::random_guid;
use crate::log::EventLog;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Rows inserted per writer batch before the table is purged.
pub const BATCH_SIZE: usize = 1000;

/// Purge statement: delete every row, then return the file to minimal size.
const PURGE_SQL: &str = "DELETE FROM test; VACUUM;";

/// Count scan with an always-true pattern predicate. The predicate forces
/// the planner through the scan path instead of a trivial unfiltered count.
const COUNT_SQL: &str = "SELECT COUNT(*) FROM test WHERE guid LIKE '%%'";

// ============================================================================
// SECTION: Writer
// ============================================================================

/// Runs the writer insert/purge cycle until cancellation.
///
/// # Errors
///
/// Returns the classified [`HarnessError`] of the first failing statement;
/// the caller logs it and lets the worker terminate.
pub fn run_writer(
    connection: &Connection,
    signal: &CancellationSignal,
    log: &EventLog,
) -> Result<(), HarnessError> {
    while !signal.is_requested() {
        for index in 0..BATCH_SIZE {
            log.line(&format!("Inserting record {index}"));
            connection
                .execute("INSERT INTO test VALUES (?1)", params![random_guid()])
                .map_err(|err| HarnessError::from_statement(&err))?;
            if signal.is_requested() {
                break;
            }
        }
        if signal.is_requested() {
            break;
        }
        log.line("Resetting");
        purge(connection)?;
    }
    Ok(())
}

/// Deletes all rows and reclaims file space.
///
/// # Errors
///
/// Returns the classified [`HarnessError`] when the purge batch fails.
pub fn purge(connection: &Connection) -> Result<(), HarnessError> {
    connection
        .execute_batch(PURGE_SQL)
        .map_err(|err| HarnessError::from_statement(&err))
}

// ============================================================================
// SECTION: Reader
// ============================================================================

/// Runs the reader count loop until cancellation.
///
/// # Errors
///
/// Returns the classified [`HarnessError`] of the first failing scan; the
/// caller logs it and lets the worker terminate.
pub fn run_reader(
    connection: &Connection,
    signal: &CancellationSignal,
    log: &EventLog,
) -> Result<(), HarnessError> {
    while !signal.is_requested() {
        log.line("Reading records");
        let count = count_records(connection)?;
        log.line(&format!("{count} records currently in table"));
    }
    Ok(())
}

/// Counts all rows through the pattern-predicate scan.
///
/// # Errors
///
/// Returns the classified [`HarnessError`] when the scan fails.
pub fn count_records(connection: &Connection) -> Result<i64, HarnessError> {
    connection
        .query_row(COUNT_SQL, [], |row| row.get(0))
        .map_err(|err| HarnessError::from_statement(&err))
}
