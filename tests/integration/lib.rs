//! Integration Test Suite for the NFT Marketplace
//!
//! Deploys the demo NFT, the marketplace and a payment token into one
//! environment and drives them the way the deployment scripts do.
//!
//! # Test Organization
//! - `harness`: Reusable test harness and script helpers
//! - `e2e_tests`: Mint, list, buy, cancel and withdraw flows
//! - `error_tests`: Failure paths across contract boundaries

#![cfg(test)]

pub mod e2e_tests;

pub use harness::*;
