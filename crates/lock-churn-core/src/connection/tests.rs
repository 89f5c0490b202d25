// lock-churn-core/src/connection/tests.rs
// ============================================================================
// Module: Connection Factory Tests
// Description: Unit tests for config defaults and error classification.
// Purpose: Validate lock-wait clamping and busy/locked taxonomy mapping.
// Dependencies: lock-churn-core, rusqlite
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

use super::HarnessError;
use super::MAX_LOCK_WAIT_MS;
use super::StressDbConfig;
use super::lock_wait_duration;

#[test]
fn default_config_uses_maximal_lock_wait() {
    let config = StressDbConfig::new("stress.sqlite");
    assert_eq!(config.max_lock_wait_ms, MAX_LOCK_WAIT_MS);
}

#[test]
fn lock_wait_is_clamped_to_engine_range() {
    let clamped = lock_wait_duration(u64::MAX);
    assert_eq!(clamped.as_millis(), u128::from(MAX_LOCK_WAIT_MS));
}

#[test]
fn busy_code_classifies_as_contention() {
    let error = rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
        Some("database is locked".to_string()),
    );
    assert!(matches!(HarnessError::from_statement(&error), HarnessError::Contention(_)));
}

#[test]
fn locked_code_classifies_as_contention() {
    let error =
        rusqlite::Error::SqliteFailure(rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED), None);
    assert!(matches!(HarnessError::from_statement(&error), HarnessError::Contention(_)));
}

#[test]
fn other_codes_classify_as_storage() {
    let error = rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CORRUPT),
        None,
    );
    assert!(matches!(HarnessError::from_statement(&error), HarnessError::Storage(_)));
}
