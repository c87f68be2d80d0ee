#![no_std]

//! Shared utility library for the marketplace contracts
//!
//! Common helpers used by both the NFT collection and the marketplace:
//! - Math utilities (checked arithmetic on token amounts)
//! - Validation utilities
//! - Storage TTL helpers
//! - Error logging helpers
//! - Event emission patterns

pub mod errors;
pub mod events;
pub mod math;
pub mod storage;
pub mod validation;


// Re-export commonly used items
pub use errors::*;
pub use events::*;
pub use math::*;
pub use storage::Ttl;
pub use validation::*;
