//! Cross-contract interface of the asset (NFT) contracts the marketplace
//! trades.
//!
//! Any contract exposing these entry points can be listed; the marketplace
//! never depends on a concrete NFT implementation.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "NonFungibleTokenClient")]
pub trait NonFungibleToken {
    /// Returns the owner of `token_id`.
    ///
    /// Expected to fail if the token does not exist.
    fn owner_of(env: Env, token_id: u32) -> Address;

    /// Returns the address approved to move `token_id`, if any.
    fn get_approved(env: Env, token_id: u32) -> Option<Address>;

    /// Moves `token_id` from `from` to `to` using `spender`'s approval.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
}
