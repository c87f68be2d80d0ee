#![no_std]

use shared_utils::{ErrorHelper, Ttl};
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, token, Address, Env};

mod events;
mod guard;
pub mod interface;
mod storage;

pub use interface::{NonFungibleToken, NonFungibleTokenClient};

// ============================================================================
// Error Types
// ============================================================================

/// Marketplace errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketplaceError {
    /// Listing price must be greater than zero
    PriceMustBeAboveZero = 1,
    /// The marketplace is not the approved address for the token
    NotApprovedForMarketPlace = 2,
    /// The token already has an active listing
    AlreadyListed = 3,
    /// Caller does not own the token or the listing
    NotOwner = 4,
    /// The token has no active listing
    NotListed = 5,
    /// Payment does not match the listing price exactly
    PriceNotMet = 6,
    /// Caller has nothing to withdraw
    NoProceeds = 7,
    /// Payment or NFT transfer failed
    TransferFailed = 8,
    /// Proceeds balance would overflow
    ArithmeticOverflow = 9,
    /// Payment token entry is missing from instance storage. The constructor
    /// always writes it, so this only shows up if that entry is lost.
    NotInitialized = 10,
}

impl MarketplaceError {
    /// Human-readable message for logging
    pub fn message(&self) -> &'static str {
        match self {
            Self::PriceMustBeAboveZero => "Price must be above zero",
            Self::NotApprovedForMarketPlace => "Marketplace is not approved for token",
            Self::AlreadyListed => "Token is already listed",
            Self::NotOwner => "Caller is not the owner",
            Self::NotListed => "Token is not listed",
            Self::PriceNotMet => "Payment does not match listing price",
            Self::NoProceeds => "No proceeds to withdraw",
            Self::TransferFailed => "Token transfer failed",
            Self::ArithmeticOverflow => "Proceeds overflow",
            Self::NotInitialized => "Payment token not set",
        }
    }
}

// ============================================================================
// Data Types
// ============================================================================

/// Listing information, keyed by (asset contract, token_id)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub seller: Address,
    pub price: i128,
}


// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct NftMarketplace;

#[contractimpl]
impl NftMarketplace {
    /// Deploy the marketplace
    ///
    /// # Arguments
    /// * `payment_token` - Token contract prices are denominated and paid in
    ///
    /// Deployments pass the native asset (XLM) contract address. Calls carry
    /// no attached value, so the marketplace pulls payment from this token.
    pub fn __constructor(e: Env, payment_token: Address) {
        storage::set_payment_token(&e, &payment_token);
        Ttl::extend_instance(&e);
    }

    /// Token contract prices are denominated and paid in
    pub fn payment_token(e: Env) -> Result<Address, MarketplaceError> {
        storage::get_payment_token(&e)
    }

    // ========================================================================
    // Listing Management
    // ========================================================================

    /// List an NFT for sale
    ///
    /// The seller keeps custody of the token; the marketplace must be its
    /// approved address so it can move the token when it sells.
    ///
    /// # Arguments
    /// * `seller` - The seller's address (must be NFT owner)
    /// * `nft_address` - The asset contract of the token
    /// * `token_id` - The NFT token ID to list
    /// * `price` - The sale price in payment token units
    ///
    /// # Errors
    /// * `PriceMustBeAboveZero` - If `price <= 0`
    /// * `AlreadyListed` - If the token already has a listing
    /// * `NotOwner` - If `seller` does not own the token
    /// * `NotApprovedForMarketPlace` - If the marketplace is not approved
    pub fn list_item(
        e: Env,
        seller: Address,
        nft_address: Address,
        token_id: u32,
        price: i128,
    ) -> Result<(), MarketplaceError> {
        // CHECKS
        seller.require_auth();

        guard::require_positive_price(&e, "list_item", price)?;
        guard::require_not_listed(&e, &nft_address, token_id)?;

        let nft = NonFungibleTokenClient::new(&e, &nft_address);
        guard::require_owner(&e, &nft, &seller, token_id)?;
        guard::require_marketplace_approved(&e, &nft, token_id)?;

        // EFFECTS
        let listing = Listing {
            seller: seller.clone(),
            price,
        };
        storage::set_listing(&e, &nft_address, token_id, &listing);
        Ttl::extend_instance(&e);

        events::item_listed(&e, &nft_address, token_id, &seller, price);

        Ok(())
    }

    /// Cancel a listing
    ///
    /// # Errors
    /// * `NotListed` - If the token has no listing
    /// * `NotOwner` - If `seller` did not create the listing
    pub fn cancel_listing(
        e: Env,
        seller: Address,
        nft_address: Address,
        token_id: u32,
    ) -> Result<(), MarketplaceError> {
        // CHECKS
        seller.require_auth();

        let listing = guard::require_listed(&e, "cancel_listing", &nft_address, token_id)?;
        guard::require_seller(&e, "cancel_listing", &listing, &seller)?;

        // EFFECTS
        storage::remove_listing(&e, &nft_address, token_id);

        events::item_deleted(&e, &nft_address, token_id, &seller);

        Ok(())
    }

    /// Change the price of an existing listing
    ///
    /// Emits `ItemListed` again with the new price.
    ///
    /// # Errors
    /// * `NotListed` - If the token has no listing
    /// * `NotOwner` - If `seller` did not create the listing
    /// * `PriceMustBeAboveZero` - If `new_price <= 0`
    pub fn update_listing(
        e: Env,
        seller: Address,
        nft_address: Address,
        token_id: u32,
        new_price: i128,
    ) -> Result<(), MarketplaceError> {
        // CHECKS
        seller.require_auth();

        let mut listing = guard::require_listed(&e, "update_listing", &nft_address, token_id)?;
        guard::require_seller(&e, "update_listing", &listing, &seller)?;
        guard::require_positive_price(&e, "update_listing", new_price)?;

        // EFFECTS
        listing.price = new_price;
        storage::set_listing(&e, &nft_address, token_id, &listing);

        events::item_listed(&e, &nft_address, token_id, &seller, new_price);

        Ok(())
    }

    /// Buy a listed NFT
    ///
    /// `payment` must equal the listing price exactly. The payment is held by
    /// the marketplace and credited to the seller's proceeds.
    ///
    /// # Errors
    /// * `NotListed` - If the token has no listing
    /// * `PriceNotMet` - If `payment` differs from the price
    /// * `TransferFailed` - If collecting the payment or moving the NFT fails
    pub fn buy_item(
        e: Env,
        buyer: Address,
        nft_address: Address,
        token_id: u32,
        payment: i128,
    ) -> Result<(), MarketplaceError> {
        // CHECKS
        buyer.require_auth();

        let listing = guard::require_listed(&e, "buy_item", &nft_address, token_id)?;
        guard::require_price_met(&e, &listing, payment)?;
        let payment_token = storage::get_payment_token(&e)?;

        // EFFECTS
        // Listing removed and proceeds credited before any external call
        storage::remove_listing(&e, &nft_address, token_id);
        storage::credit_proceeds(&e, &listing.seller, payment).ok_or_else(|| {
            ErrorHelper::log_error_with_context(
                &e,
                "buy_item",
                MarketplaceError::ArithmeticOverflow.message(),
            );
            MarketplaceError::ArithmeticOverflow
        })?;
        Ttl::extend_instance(&e);

        // INTERACTIONS
        let marketplace = e.current_contract_address();

        let payment_client = token::Client::new(&e, &payment_token);
        if !matches!(
            payment_client.try_transfer(&buyer, &marketplace, &payment),
            Ok(Ok(()))
        ) {
            ErrorHelper::log_error_with_context(&e, "buy_item", "payment could not be collected");
            return Err(MarketplaceError::TransferFailed);
        }

        let nft = NonFungibleTokenClient::new(&e, &nft_address);
        if !matches!(
            nft.try_transfer_from(&marketplace, &listing.seller, &buyer, &token_id),
            Ok(Ok(()))
        ) {
            ErrorHelper::log_token_error(
                &e,
                "buy_item",
                &nft_address,
                token_id,
                "token could not be transferred to buyer",
            );
            return Err(MarketplaceError::TransferFailed);
        }

        events::item_bought(&e, &nft_address, token_id, &buyer, listing.price);

        Ok(())
    }

    /// Get a listing, `None` when the token is not listed
    pub fn get_listing(e: Env, nft_address: Address, token_id: u32) -> Option<Listing> {
        storage::get_listing(&e, &nft_address, token_id)
    }

    // ========================================================================
    // Proceeds
    // ========================================================================

    /// Withdraw the caller's accumulated proceeds
    ///
    /// The balance is cleared before the outbound transfer. A failed
    /// transfer returns an error, which rolls the whole invocation back and
    /// leaves the balance in place.
    ///
    /// # Returns
    /// The amount paid out
    ///
    /// # Errors
    /// * `NoProceeds` - If the seller's balance is zero
    /// * `TransferFailed` - If the payout transfer fails
    pub fn withdraw_proceeds(e: Env, seller: Address) -> Result<i128, MarketplaceError> {
        // CHECKS
        seller.require_auth();

        let payment_token = storage::get_payment_token(&e)?;

        // EFFECTS
        let amount = storage::take_proceeds(&e, &seller);
        if amount <= 0 {
            ErrorHelper::log_error_with_context(
                &e,
                "withdraw_proceeds",
                MarketplaceError::NoProceeds.message(),
            );
            return Err(MarketplaceError::NoProceeds);
        }

        // INTERACTIONS
        let payment_client = token::Client::new(&e, &payment_token);
        if !matches!(
            payment_client.try_transfer(&e.current_contract_address(), &seller, &amount),
            Ok(Ok(()))
        ) {
            ErrorHelper::log_error_with_context(&e, "withdraw_proceeds", "payout failed");
            return Err(MarketplaceError::TransferFailed);
        }

        events::proceeds_withdrawn(&e, &seller, amount);

        Ok(amount)
    }

    /// Withdrawable balance of `seller`
    pub fn get_proceeds(e: Env, seller: Address) -> i128 {
        storage::get_proceeds(&e, &seller)
    }
}
