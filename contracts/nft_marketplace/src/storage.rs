//! Listing registry and proceeds ledger storage

use crate::{Listing, MarketplaceError};
use shared_utils::{SafeMath, Ttl};
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Token contract prices are paid in
    PaymentToken,
    /// Listing data ((asset, token_id) -> Listing)
    Listing(Address, u32),
    /// Withdrawable balance (seller -> i128)
    Proceeds(Address),
}

// --- Payment Token ---

pub fn set_payment_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::PaymentToken, token);
}

/// The constructor always sets this. A missing entry still surfaces as
/// `NotInitialized` instead of a host panic.
pub fn get_payment_token(e: &Env) -> Result<Address, MarketplaceError> {
    e.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(MarketplaceError::NotInitialized)
}

// --- Listings ---

pub fn get_listing(e: &Env, nft_address: &Address, token_id: u32) -> Option<Listing> {
    e.storage()
        .persistent()
        .get(&DataKey::Listing(nft_address.clone(), token_id))
}

pub fn has_listing(e: &Env, nft_address: &Address, token_id: u32) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::Listing(nft_address.clone(), token_id))
}

pub fn set_listing(e: &Env, nft_address: &Address, token_id: u32, listing: &Listing) {
    let key = DataKey::Listing(nft_address.clone(), token_id);
    e.storage().persistent().set(&key, listing);
    Ttl::extend_persistent(e, &key);
}

pub fn remove_listing(e: &Env, nft_address: &Address, token_id: u32) {
    e.storage()
        .persistent()
        .remove(&DataKey::Listing(nft_address.clone(), token_id));
}

// --- Proceeds ---

pub fn get_proceeds(e: &Env, seller: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Proceeds(seller.clone()))
        .unwrap_or(0)
}

/// Adds `amount` to the seller's balance. Returns the new balance, or `None`
/// (leaving storage untouched) on overflow.
pub fn credit_proceeds(e: &Env, seller: &Address, amount: i128) -> Option<i128> {
    let balance = SafeMath::add(get_proceeds(e, seller), amount)?;
    let key = DataKey::Proceeds(seller.clone());
    e.storage().persistent().set(&key, &balance);
    Ttl::extend_persistent(e, &key);
    Some(balance)
}

/// Clears the seller's balance and returns what it held.
pub fn take_proceeds(e: &Env, seller: &Address) -> i128 {
    let balance = get_proceeds(e, seller);
    e.storage()
        .persistent()
        .remove(&DataKey::Proceeds(seller.clone()));
    balance
}
