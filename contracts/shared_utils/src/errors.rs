//! Error logging helpers
//!
//! Contracts report failures through their own `#[contracterror]` enums.
//! These helpers write the surrounding context to the diagnostic log so it
//! can be inspected in tests and simulation.

use soroban_sdk::{log, Address, Env};

/// Error helper functions
pub struct ErrorHelper;

impl ErrorHelper {
    /// Log an error with context
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `context` - The error context (usually the entry point name)
    /// * `message` - The error message
    pub fn log_error_with_context(e: &Env, context: &str, message: &str) {
        log!(e, "Error [{}]: {}", context, message);
    }

    /// Log an error that concerns a specific token of an asset contract
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `context` - The error context
    /// * `asset` - The asset contract address
    /// * `token_id` - The token id within the asset contract
    /// * `message` - The error message
    pub fn log_token_error(e: &Env, context: &str, asset: &Address, token_id: u32, message: &str) {
        log!(
            e,
            "Error [{}]: {} (asset {}, token {})",
            context,
            message,
            asset.clone(),
            token_id
        );
    }
}
