// lock-churn-core/src/cancel.rs
// ============================================================================
// Module: Cancellation Signal
// Description: Write-once, read-many stop flag shared by all workers.
// Purpose: Provide cooperative cancellation checked at loop boundaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The cancellation signal is the only piece of shared in-process state in
//! the harness. It exposes exactly two operations: `request`, which latches
//! the flag, and `is_requested`, which reads it. Workers never abort an
//! in-flight statement; they observe the flag between iterations and return.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

// ============================================================================
// SECTION: Signal
// ============================================================================

/// Shared cancellation token handed to every worker at construction.
#[derive(Debug, Clone, Default)]
pub struct CancellationSignal {
    /// Latched stop flag; set exactly once, read at loop boundaries.
    requested: Arc<AtomicBool>,
}

impl CancellationSignal {
    /// Creates a fresh, unrequested signal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether cancellation has been requested.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }

    /// Latches the signal. Subsequent calls are no-ops.
    pub fn request(&self) {
        self.requested.store(true, Ordering::Release);
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
