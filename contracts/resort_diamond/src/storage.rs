//! TTL management shared by every facet.
//!
//! Configuration lives in instance storage and per-user records in
//! persistent storage; both are extended whenever they are written.

use soroban_sdk::{Env, IntoVal, Val};

/// Roughly one day of ledgers at five seconds per ledger.
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Roughly thirty days of ledgers.
pub const BUMP_TARGET: u32 = 518_400;

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn bump_persistent<K>(e: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    e.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}
