//! Precondition checks shared by the marketplace entry points.
//!
//! Ownership and approval are always read from the asset contract at call
//! time, never cached.

use crate::interface::NonFungibleTokenClient;
use crate::{storage, Listing, MarketplaceError};
use shared_utils::{ErrorHelper, Validation};
use soroban_sdk::{Address, Env};

fn reject(e: &Env, context: &str, error: MarketplaceError) -> MarketplaceError {
    ErrorHelper::log_error_with_context(e, context, error.message());
    error
}

pub fn require_positive_price(
    e: &Env,
    context: &str,
    price: i128,
) -> Result<(), MarketplaceError> {
    if !Validation::is_positive(price) {
        return Err(reject(e, context, MarketplaceError::PriceMustBeAboveZero));
    }
    Ok(())
}

pub fn require_not_listed(
    e: &Env,
    nft_address: &Address,
    token_id: u32,
) -> Result<(), MarketplaceError> {
    if storage::has_listing(e, nft_address, token_id) {
        let error = MarketplaceError::AlreadyListed;
        ErrorHelper::log_token_error(e, "list_item", nft_address, token_id, error.message());
        return Err(error);
    }
    Ok(())
}

pub fn require_listed(
    e: &Env,
    context: &str,
    nft_address: &Address,
    token_id: u32,
) -> Result<Listing, MarketplaceError> {
    storage::get_listing(e, nft_address, token_id).ok_or_else(|| {
        let error = MarketplaceError::NotListed;
        ErrorHelper::log_token_error(e, context, nft_address, token_id, error.message());
        error
    })
}

pub fn require_seller(
    e: &Env,
    context: &str,
    listing: &Listing,
    caller: &Address,
) -> Result<(), MarketplaceError> {
    if listing.seller != *caller {
        return Err(reject(e, context, MarketplaceError::NotOwner));
    }
    Ok(())
}

pub fn require_price_met(
    e: &Env,
    listing: &Listing,
    payment: i128,
) -> Result<(), MarketplaceError> {
    if !Validation::is_exact(payment, listing.price) {
        return Err(reject(e, "buy_item", MarketplaceError::PriceNotMet));
    }
    Ok(())
}

/// `seller` must own the token according to the asset contract. A failing
/// `owner_of` (e.g. unminted token) counts as not owning it.
pub fn require_owner(
    e: &Env,
    nft: &NonFungibleTokenClient<'_>,
    seller: &Address,
    token_id: u32,
) -> Result<(), MarketplaceError> {
    match nft.try_owner_of(&token_id) {
        Ok(Ok(owner)) if owner == *seller => Ok(()),
        _ => Err(reject(e, "list_item", MarketplaceError::NotOwner)),
    }
}

/// The marketplace itself must be the approved address for the token. A
/// failing `get_approved` counts as not approved.
pub fn require_marketplace_approved(
    e: &Env,
    nft: &NonFungibleTokenClient<'_>,
    token_id: u32,
) -> Result<(), MarketplaceError> {
    match nft.try_get_approved(&token_id) {
        Ok(Ok(Some(approved))) if approved == e.current_contract_address() => Ok(()),
        _ => Err(reject(
            e,
            "list_item",
            MarketplaceError::NotApprovedForMarketPlace,
        )),
    }
}
