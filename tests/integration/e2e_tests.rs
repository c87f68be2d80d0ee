//! End-to-End Flow Tests
//!
//! These tests verify complete marketplace journeys:
//! - Mint, approve and list through the demo NFT
//! - Purchases moving payment and token in one invocation
//! - Proceeds accounting and withdrawal
//! - Final ownership/balance verification

use crate::harness::{TestHarness, DEFAULT_USER_BALANCE, PRICE};
use soroban_sdk::{symbol_short, testutils::Events, vec, Address, IntoVal};

/// Test: Mint and list, then let a couple of ledgers close
#[test]
fn test_e2e_mint_and_list() {
    let harness = TestHarness::new();
    let deployer = &harness.accounts.deployer;
    let nft = harness.nft_client();

    let token_id = harness.mint_and_list(deployer, PRICE);
    harness.advance_ledgers(2);

    // Seller keeps custody while listed
    assert_eq!(nft.owner_of(&token_id), *deployer);
    assert_eq!(
        nft.get_approved(&token_id),
        Some(harness.contracts.marketplace.clone())
    );

    let listing = harness
        .marketplace_client()
        .get_listing(&harness.contracts.basic_nft, &token_id)
        .unwrap();
    assert_eq!(listing.seller, *deployer);
    assert_eq!(listing.price, PRICE);

    assert_eq!(
        harness.count_events(
            &harness.contracts.marketplace,
            &harness.token_topics("ItemListed", token_id)
        ),
        1
    );
}

/// Test: Full sale lifecycle (list -> buy -> withdraw)
#[test]
fn test_e2e_buy_and_withdraw() {
    let harness = TestHarness::new();
    let deployer = &harness.accounts.deployer;
    let user = &harness.accounts.user;
    let marketplace = harness.marketplace_client();

    // ========== PHASE 1: LIST ==========
    let token_id = harness.mint_and_list(deployer, PRICE);

    // ========== PHASE 2: BUY ==========
    marketplace.buy_item(user, &harness.contracts.basic_nft, &token_id, &PRICE);

    assert_eq!(harness.nft_client().owner_of(&token_id), *user);
    assert_eq!(harness.nft_client().get_approved(&token_id), None);
    assert_eq!(marketplace.get_listing(&harness.contracts.basic_nft, &token_id), None);
    assert_eq!(marketplace.get_proceeds(deployer), PRICE);
    assert_eq!(harness.balance(user), DEFAULT_USER_BALANCE - PRICE);
    assert_eq!(harness.balance(&harness.contracts.marketplace), PRICE);

    assert_eq!(
        harness.count_events(
            &harness.contracts.marketplace,
            &harness.token_topics("ItemBought", token_id)
        ),
        1
    );

    // ========== PHASE 3: WITHDRAW ==========
    let withdrawn = marketplace.withdraw_proceeds(deployer);

    assert_eq!(withdrawn, PRICE);
    assert_eq!(marketplace.get_proceeds(deployer), 0);
    assert_eq!(harness.balance(deployer), PRICE);
    assert_eq!(harness.balance(&harness.contracts.marketplace), 0);

    let events = harness.env.events().all();
    let last_event = events.last().unwrap();
    assert_eq!(last_event.0, harness.contracts.marketplace);
    assert_eq!(
        last_event.1,
        vec![
            &harness.env,
            symbol_short!("Withdrawn").into_val(&harness.env),
            deployer.into_val(&harness.env)
        ]
    );
}

/// Test: Cancelled listing can no longer be bought
#[test]
fn test_e2e_cancel_listing() {
    let harness = TestHarness::new();
    let deployer = &harness.accounts.deployer;
    let user = &harness.accounts.user;
    let marketplace = harness.marketplace_client();

    let token_id = harness.mint_and_list(deployer, PRICE);
    harness.advance_ledgers(2);
    harness.cancel(deployer, token_id);

    assert_eq!(marketplace.get_listing(&harness.contracts.basic_nft, &token_id), None);
    assert_eq!(
        harness.count_events(
            &harness.contracts.marketplace,
            &harness.token_topics("ItemDeleted", token_id)
        ),
        1
    );

    let result = marketplace.try_buy_item(user, &harness.contracts.basic_nft, &token_id, &PRICE);
    assert_eq!(result, Err(Ok(nft_marketplace::MarketplaceError::NotListed)));

    // Nothing moved
    assert_eq!(harness.nft_client().owner_of(&token_id), *deployer);
    assert_eq!(harness.balance(user), DEFAULT_USER_BALANCE);
}

/// Test: Price update applies to the next purchase
#[test]
fn test_e2e_update_then_buy() {
    let harness = TestHarness::new();
    let deployer = &harness.accounts.deployer;
    let user = &harness.accounts.user;
    let marketplace = harness.marketplace_client();
    let new_price = PRICE * 5;

    let token_id = harness.mint_and_list(deployer, PRICE);
    marketplace.update_listing(deployer, &harness.contracts.basic_nft, &token_id, &new_price);

    let data = harness
        .last_event_data(
            &harness.contracts.marketplace,
            &harness.token_topics("ItemListed", token_id),
        )
        .unwrap();
    let (_, event_price): (Address, i128) = data.into_val(&harness.env);
    assert_eq!(event_price, new_price);

    // Old price no longer accepted
    let result = marketplace.try_buy_item(user, &harness.contracts.basic_nft, &token_id, &PRICE);
    assert_eq!(result, Err(Ok(nft_marketplace::MarketplaceError::PriceNotMet)));

    harness.buy(user, token_id);

    assert_eq!(harness.nft_client().owner_of(&token_id), *user);
    assert_eq!(marketplace.get_proceeds(deployer), new_price);
    assert_eq!(harness.balance(user), DEFAULT_USER_BALANCE - new_price);
}

/// Test: Buyer relists the token and sells it on
#[test]
fn test_e2e_resale() {
    let harness = TestHarness::new();
    let deployer = &harness.accounts.deployer;
    let user = &harness.accounts.user;
    let second_buyer = &harness.accounts.attacker;
    let marketplace = harness.marketplace_client();
    let resale_price = PRICE * 2;

    let token_id = harness.mint_and_list(deployer, PRICE);
    harness.buy(user, token_id);

    // New owner approves and relists
    harness
        .nft_client()
        .approve(user, &harness.contracts.marketplace, &token_id);
    marketplace.list_item(user, &harness.contracts.basic_nft, &token_id, &resale_price);
    harness.buy(second_buyer, token_id);

    assert_eq!(harness.nft_client().owner_of(&token_id), *second_buyer);
    assert_eq!(marketplace.get_proceeds(deployer), PRICE);
    assert_eq!(marketplace.get_proceeds(user), resale_price);

    marketplace.withdraw_proceeds(deployer);
    marketplace.withdraw_proceeds(user);

    assert_eq!(harness.balance(deployer), PRICE);
    assert_eq!(
        harness.balance(user),
        DEFAULT_USER_BALANCE - PRICE + resale_price
    );
    assert_eq!(harness.balance(second_buyer), DEFAULT_USER_BALANCE - resale_price);
    assert_eq!(harness.balance(&harness.contracts.marketplace), 0);
}

/// Test: Several sales accumulate into one withdrawal
#[test]
fn test_e2e_proceeds_accumulate() {
    let harness = TestHarness::new();
    let deployer = &harness.accounts.deployer;
    let user = &harness.accounts.user;
    let marketplace = harness.marketplace_client();

    let first = harness.mint_and_list(deployer, PRICE);
    let second = harness.mint_and_list(deployer, PRICE * 3);
    let third = harness.mint_and_list(deployer, PRICE * 7);
    assert_eq!((first, second, third), (0, 1, 2));

    harness.buy(user, first);
    harness.buy(user, second);
    harness.buy(user, third);

    assert_eq!(harness.nft_client().balance_of(user), 3);
    assert_eq!(harness.nft_client().balance_of(deployer), 0);
    assert_eq!(marketplace.get_proceeds(deployer), PRICE * 11);

    assert_eq!(marketplace.withdraw_proceeds(deployer), PRICE * 11);
    assert_eq!(harness.balance(deployer), PRICE * 11);
}

/// Test: Listings on one asset contract are independent of another
#[test]
fn test_e2e_two_nft_contracts() {
    let harness = TestHarness::new();
    let deployer = &harness.accounts.deployer;
    let user = &harness.accounts.user;
    let marketplace = harness.marketplace_client();

    let other_nft_id = harness.env.register(basic_nft::BasicNft, ());
    let other_nft = basic_nft::BasicNftClient::new(&harness.env, &other_nft_id);

    let token_id = harness.mint_and_list(deployer, PRICE);
    let other_token_id = other_nft.mint_nft(deployer);
    other_nft.approve(deployer, &harness.contracts.marketplace, &other_token_id);
    marketplace.list_item(deployer, &other_nft_id, &other_token_id, &(PRICE * 2));

    // Same token id, different assets
    assert_eq!(token_id, other_token_id);

    marketplace.buy_item(user, &other_nft_id, &other_token_id, &(PRICE * 2));

    assert_eq!(other_nft.owner_of(&other_token_id), *user);
    assert_eq!(harness.nft_client().owner_of(&token_id), *deployer);
    assert!(marketplace
        .get_listing(&harness.contracts.basic_nft, &token_id)
        .is_some());
    assert_eq!(marketplace.get_listing(&other_nft_id, &other_token_id), None);
}
