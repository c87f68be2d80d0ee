//! Storage lifetime helpers
//!
//! Persistent entries (listings, proceeds, token ownership) and the contract
//! instance are archived once their TTL runs out. Every write extends them.

use soroban_sdk::{Env, IntoVal, Val};

/// Ledgers closed per day at ~5 seconds per ledger
pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// TTL helper functions
pub struct Ttl;

impl Ttl {
    /// Extend the contract instance (and its instance storage)
    ///
    /// # Arguments
    /// * `e` - The environment
    pub fn extend_instance(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    /// Extend a persistent entry. The entry must exist.
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `key` - The storage key
    pub fn extend_persistent<K>(e: &Env, key: &K)
    where
        K: IntoVal<Env, Val>,
    {
        e.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
}
