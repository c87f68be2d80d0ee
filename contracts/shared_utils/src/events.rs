//! Event emission patterns and utilities

use soroban_sdk::{Address, Env, Symbol, Topics};

/// Event emission helper functions
pub struct Events;

impl Events {
    /// Emit an event with multiple topics
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topics` - Tuple of topics (must implement Topics)
    /// * `data` - The event data (tuple)
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish(topics, data);
    }

    /// Emit an event about one token of an asset contract.
    ///
    /// Topics are `[name, asset, token_id]` so indexers can filter on the
    /// token without decoding the payload.
    pub fn emit_for_token<T>(e: &Env, name: &str, asset: &Address, token_id: u32, data: T)
    where
        T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        Self::emit_with_topics(e, (Symbol::new(e, name), asset.clone(), token_id), data);
    }
}
