//! Overflow-safe arithmetic helpers for ledger balances.
//!
//! Every helper aborts with the shared arithmetic error instead of wrapping.

use resort_errors::{fail, ContractError};

/// Checked `i128` addition.
#[inline]
#[must_use]
pub fn add_i128(a: i128, b: i128) -> i128 {
    a.checked_add(b)
        .unwrap_or_else(|| fail(ContractError::Overflow))
}

/// Checked `i128` subtraction.
#[inline]
#[must_use]
pub fn sub_i128(a: i128, b: i128) -> i128 {
    a.checked_sub(b)
        .unwrap_or_else(|| fail(ContractError::Underflow))
}

/// Checked `u32` addition, used by the per-year booking counter.
#[inline]
#[must_use]
pub fn add_u32(a: u32, b: u32) -> u32 {
    a.checked_add(b)
        .unwrap_or_else(|| fail(ContractError::Overflow))
}

/// Checked `u32` subtraction.
#[inline]
#[must_use]
pub fn sub_u32(a: u32, b: u32) -> u32 {
    a.checked_sub(b)
        .unwrap_or_else(|| fail(ContractError::Underflow))
}

/// `a + b` for timestamps, saturating at `u64::MAX` so a huge lock window
/// never unlocks instead of wrapping around.
#[inline]
#[must_use]
pub fn saturating_deadline(start: u64, window: u64) -> u64 {
    start.saturating_add(window)
}
