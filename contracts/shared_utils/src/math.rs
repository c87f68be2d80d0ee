//! Checked arithmetic for token amounts and counters
//!
//! Every helper returns `None` instead of wrapping or panicking so callers
//! can map overflow onto their own contract error.

/// Safe math operations to prevent overflow/underflow
pub struct SafeMath;

impl SafeMath {
    /// Add two amounts, `None` on overflow
    pub fn add(a: i128, b: i128) -> Option<i128> {
        a.checked_add(b)
    }

    /// Increment a counter by one, `None` once `u32::MAX` is reached
    pub fn increment(value: u32) -> Option<u32> {
        value.checked_add(1)
    }
}
