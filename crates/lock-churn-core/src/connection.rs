// lock-churn-core/src/connection.rs
// ============================================================================
// Module: Connection Factory
// Description: Opens per-worker SQLite connections with contention tolerance.
// Purpose: Lazily create the database file and its single stress table.
// Dependencies: rusqlite, serde, thiserror
// ============================================================================

//! ## Overview
//! Every worker owns exactly one connection for its whole lifetime. The
//! factory opens the shared database file (creating it on first use),
//! applies the maximal busy timeout so transient lock contention is retried
//! by the engine instead of surfacing as a worker-fatal error, and runs
//! idempotent schema initialization. Schema init uses `IF NOT EXISTS`, so
//! worker startup order is irrelevant to correctness.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use rusqlite::Connection;
use rusqlite::ErrorCode;
use rusqlite::OpenFlags;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum lock wait accepted by the engine (`sqlite3_busy_timeout` takes a
/// C int of milliseconds). Connections configured with this value wait
/// roughly 24.8 days for a lock, which is "indefinitely" for stress runs.
pub const MAX_LOCK_WAIT_MS: u64 = i32::MAX as u64;

/// Schema for the single stress table.
const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS test (guid TEXT NOT NULL);";

// ============================================================================
// SECTION: Config
// ============================================================================

/// Configuration for the shared stress database.
#[derive(Debug, Clone, Deserialize)]
pub struct StressDbConfig {
    /// Path to the `SQLite` database file.
    pub path: PathBuf,
    /// Maximum lock wait in milliseconds before a contention error surfaces.
    #[serde(default = "default_max_lock_wait_ms")]
    pub max_lock_wait_ms: u64,
}

impl StressDbConfig {
    /// Builds a config for `path` with the maximal lock wait.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_lock_wait_ms: MAX_LOCK_WAIT_MS,
        }
    }
}

/// Returns the default maximum lock wait for stress connections.
const fn default_max_lock_wait_ms() -> u64 {
    MAX_LOCK_WAIT_MS
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Harness storage errors.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The database file cannot be created/opened or the engine cannot
    /// be initialized.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// A lock could not be acquired within the configured wait bound.
    #[error("lock wait exceeded: {0}")]
    Contention(String),
    /// Any other error surfaced by the engine during a statement.
    #[error("storage error: {0}")]
    Storage(String),
}

impl HarnessError {
    /// Classifies an engine error raised mid-statement.
    ///
    /// Busy/locked codes become [`HarnessError::Contention`]; with the
    /// maximal lock wait they are practically unreachable, but they must
    /// stay catchable conditions rather than crashes.
    #[must_use]
    pub fn from_statement(error: &rusqlite::Error) -> Self {
        match error {
            rusqlite::Error::SqliteFailure(failure, _)
                if matches!(
                    failure.code,
                    ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
                ) =>
            {
                Self::Contention(error.to_string())
            }
            _ => Self::Storage(error.to_string()),
        }
    }
}

// ============================================================================
// SECTION: Factory
// ============================================================================

/// Opens a connection to the shared stress database.
///
/// Creates the file lazily, applies the configured busy timeout, and
/// ensures the stress table exists.
///
/// # Errors
///
/// Returns [`HarnessError::Unavailable`] when the file cannot be opened or
/// the engine cannot be initialized.
pub fn open_connection(config: &StressDbConfig) -> Result<Connection, HarnessError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
    let connection = Connection::open_with_flags(&config.path, flags)
        .map_err(|err| HarnessError::Unavailable(err.to_string()))?;
    connection
        .busy_timeout(lock_wait_duration(config.max_lock_wait_ms))
        .map_err(|err| HarnessError::Unavailable(err.to_string()))?;
    connection
        .execute_batch(SCHEMA_SQL)
        .map_err(|err| HarnessError::Unavailable(err.to_string()))?;
    Ok(connection)
}

/// Clamps the configured lock wait to the range the engine accepts.
fn lock_wait_duration(max_lock_wait_ms: u64) -> Duration {
    Duration::from_millis(max_lock_wait_ms.min(MAX_LOCK_WAIT_MS))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
