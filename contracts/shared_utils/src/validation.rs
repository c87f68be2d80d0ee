//! Validation utilities for common input validation patterns

/// Validation utility functions
pub struct Validation;

impl Validation {
    /// Whether an amount is strictly greater than zero
    ///
    /// # Arguments
    /// * `amount` - The amount to validate
    pub fn is_positive(amount: i128) -> bool {
        amount > 0
    }

    /// Whether two amounts match exactly
    ///
    /// Used for fixed-price payments where both under- and over-payment are
    /// rejected.
    pub fn is_exact(amount: i128, expected: i128) -> bool {
        amount == expected
    }
}
