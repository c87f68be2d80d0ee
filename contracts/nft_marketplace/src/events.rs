//! Marketplace events
//!
//! Listing events are topic-indexed by `[name, asset, token_id]`; the
//! withdrawal event by `[name, seller]`.

use shared_utils::Events;
use soroban_sdk::{symbol_short, Address, Env};

/// Emitted on a new listing and again on every price update.
pub fn item_listed(e: &Env, nft_address: &Address, token_id: u32, seller: &Address, price: i128) {
    Events::emit_for_token(e, "ItemListed", nft_address, token_id, (seller.clone(), price));
}

pub fn item_deleted(e: &Env, nft_address: &Address, token_id: u32, seller: &Address) {
    Events::emit_for_token(e, "ItemDeleted", nft_address, token_id, seller.clone());
}

pub fn item_bought(e: &Env, nft_address: &Address, token_id: u32, buyer: &Address, price: i128) {
    Events::emit_for_token(e, "ItemBought", nft_address, token_id, (buyer.clone(), price));
}

pub fn proceeds_withdrawn(e: &Env, seller: &Address, amount: i128) {
    Events::emit_with_topics(e, (symbol_short!("Withdrawn"), seller.clone()), amount);
}
