// lock-churn-core/src/guid.rs
// ============================================================================
// Module: Record Identifiers
// Description: Random 128-bit identifiers rendered as UUID-v4 text.
// Purpose: Give every inserted row a statistically unique guid value.
// Dependencies: rand
// ============================================================================

//! ## Overview
//! Each inserted record carries one attribute: a freshly generated random
//! 128-bit identifier in canonical lowercase UUID-v4 form. Uniqueness is
//! statistical; the stress table deliberately carries no constraint.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;

use rand::RngCore;

// ============================================================================
// SECTION: Generation
// ============================================================================

/// Generates a random identifier in canonical UUID-v4 form.
#[must_use]
pub fn random_guid() -> String {
    let mut bytes = [0_u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    // RFC 4122: version nibble 4, variant bits 10.
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    render_guid(&bytes)
}

/// Renders 16 bytes in 8-4-4-4-12 lowercase hex form.
fn render_guid(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(36);
    for (index, byte) in bytes.iter().enumerate() {
        if matches!(index, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        // Writing hex into a String cannot fail.
        let _ = write!(out, "{byte:02x}");
    }
    out
}

// ============================================================================
// SECTION: Tests
// ============================================================================
