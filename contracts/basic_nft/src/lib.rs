#![no_std]
use shared_utils::{ErrorHelper, Events, SafeMath, Ttl};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, String,
    Symbol,
};


/// Collection name
pub const NAME: &str = "Dogie";
/// Collection symbol
pub const SYMBOL: &str = "DOG";
/// Every token in the collection shares the same metadata document
pub const TOKEN_URI: &str =
    "ipfs://bafybeig37ioir76s7mg5oobetncojcm3c3hxasyd4rvid4jqhy4gkaheg4/?filename=0-PUG.json";

// ============================================================================
// Error Types
// ============================================================================

/// Contract errors for structured error handling
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    /// No token has been minted with the given token_id
    TokenNotFound = 1,
    /// `from` is not the current owner of the token
    NotOwner = 2,
    /// Caller is neither the owner, the approved address nor an operator
    NotAuthorized = 3,
    /// Token id counter is exhausted
    TokenLimitReached = 4,
}

// ============================================================================
// Data Types
// ============================================================================

/// Storage keys for the contract
#[contracttype]
pub enum DataKey {
    /// Id the next minted token receives
    TokenCounter,
    /// Owner mapping (token_id -> Address)
    Owner(u32),
    /// Single-token approval (token_id -> Address)
    Approved(u32),
    /// Number of tokens held (owner -> u32)
    Balance(Address),
    /// Operator approval (owner, operator) -> bool
    Operator(Address, Address),
}

// ============================================================================
// Storage Module
// ============================================================================

mod storage {
    use super::*;

    // --- Token Counter ---

    pub fn get_token_counter(e: &Env) -> u32 {
        e.storage()
            .instance()
            .get(&DataKey::TokenCounter)
            .unwrap_or(0)
    }

    pub fn set_token_counter(e: &Env, count: u32) {
        e.storage().instance().set(&DataKey::TokenCounter, &count);
    }

    // --- Owner Mapping ---

    pub fn set_owner(e: &Env, token_id: u32, owner: &Address) {
        let key = DataKey::Owner(token_id);
        e.storage().persistent().set(&key, owner);
        Ttl::extend_persistent(e, &key);
    }

    pub fn get_owner(e: &Env, token_id: u32) -> Option<Address> {
        e.storage().persistent().get(&DataKey::Owner(token_id))
    }

    // --- Approvals ---

    pub fn set_approved(e: &Env, token_id: u32, approved: &Address) {
        let key = DataKey::Approved(token_id);
        e.storage().persistent().set(&key, approved);
        Ttl::extend_persistent(e, &key);
    }

    pub fn get_approved(e: &Env, token_id: u32) -> Option<Address> {
        e.storage().persistent().get(&DataKey::Approved(token_id))
    }

    pub fn clear_approved(e: &Env, token_id: u32) {
        e.storage().persistent().remove(&DataKey::Approved(token_id));
    }

    pub fn set_operator(e: &Env, owner: &Address, operator: &Address, approved: bool) {
        let key = DataKey::Operator(owner.clone(), operator.clone());
        if approved {
            e.storage().persistent().set(&key, &true);
            Ttl::extend_persistent(e, &key);
        } else {
            e.storage().persistent().remove(&key);
        }
    }

    pub fn is_operator(e: &Env, owner: &Address, operator: &Address) -> bool {
        e.storage()
            .persistent()
            .get(&DataKey::Operator(owner.clone(), operator.clone()))
            .unwrap_or(false)
    }

    // --- Balances ---

    pub fn get_balance(e: &Env, owner: &Address) -> u32 {
        e.storage()
            .persistent()
            .get(&DataKey::Balance(owner.clone()))
            .unwrap_or(0)
    }

    pub fn set_balance(e: &Env, owner: &Address, balance: u32) {
        let key = DataKey::Balance(owner.clone());
        if balance == 0 {
            e.storage().persistent().remove(&key);
        } else {
            e.storage().persistent().set(&key, &balance);
            Ttl::extend_persistent(e, &key);
        }
    }
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct BasicNft;

#[contractimpl]
impl BasicNft {
    // ========================================================================
    // Minting
    // ========================================================================

    /// Mint the next token of the collection to `to`
    ///
    /// Token ids start at 0 and increase by one per mint.
    ///
    /// # Returns
    /// The token_id of the newly minted NFT
    pub fn mint_nft(e: Env, to: Address) -> Result<u32, NftError> {
        to.require_auth();

        let token_id = storage::get_token_counter(&e);
        let next_id = SafeMath::increment(token_id).ok_or(NftError::TokenLimitReached)?;
        let balance = SafeMath::increment(storage::get_balance(&e, &to))
            .ok_or(NftError::TokenLimitReached)?;

        storage::set_owner(&e, token_id, &to);
        storage::set_balance(&e, &to, balance);
        storage::set_token_counter(&e, next_id);
        Ttl::extend_instance(&e);

        Events::emit_with_topics(&e, (symbol_short!("Mint"), token_id), to);

        Ok(token_id)
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    /// Get owner of NFT
    pub fn owner_of(e: Env, token_id: u32) -> Result<Address, NftError> {
        storage::get_owner(&e, token_id).ok_or(NftError::TokenNotFound)
    }

    /// Number of tokens held by `owner`
    pub fn balance_of(e: Env, owner: Address) -> u32 {
        storage::get_balance(&e, &owner)
    }

    /// Number of tokens minted so far (also the id of the next token)
    pub fn get_token_counter(e: Env) -> u32 {
        storage::get_token_counter(&e)
    }

    pub fn name(e: Env) -> String {
        String::from_str(&e, NAME)
    }

    pub fn symbol(e: Env) -> String {
        String::from_str(&e, SYMBOL)
    }

    /// Metadata URI of a minted token
    pub fn token_uri(e: Env, token_id: u32) -> Result<String, NftError> {
        if storage::get_owner(&e, token_id).is_none() {
            return Err(NftError::TokenNotFound);
        }
        Ok(String::from_str(&e, TOKEN_URI))
    }

    // ========================================================================
    // Approvals
    // ========================================================================

    /// Approve `approved` to transfer `token_id` on the owner's behalf
    ///
    /// Only one address is approved per token at a time; approving a new
    /// address replaces the previous one.
    ///
    /// # Errors
    /// * `TokenNotFound` - If the NFT does not exist
    /// * `NotAuthorized` - If `approver` is neither the owner nor an operator
    pub fn approve(
        e: Env,
        approver: Address,
        approved: Address,
        token_id: u32,
    ) -> Result<(), NftError> {
        approver.require_auth();

        let owner = storage::get_owner(&e, token_id).ok_or(NftError::TokenNotFound)?;
        if approver != owner && !storage::is_operator(&e, &owner, &approver) {
            ErrorHelper::log_error_with_context(&e, "approve", "approver does not control token");
            return Err(NftError::NotAuthorized);
        }

        storage::set_approved(&e, token_id, &approved);

        Events::emit_with_topics(
            &e,
            (Symbol::new(&e, "Approval"), token_id),
            (owner, approved),
        );

        Ok(())
    }

    /// Address currently approved for `token_id`, if any
    pub fn get_approved(e: Env, token_id: u32) -> Option<Address> {
        storage::get_approved(&e, token_id)
    }

    /// Grant or revoke `operator` control over every token held by `owner`
    pub fn set_approval_for_all(e: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();

        storage::set_operator(&e, &owner, &operator, approved);

        Events::emit_with_topics(
            &e,
            (Symbol::new(&e, "ApprovalForAll"), owner),
            (operator, approved),
        );
    }

    pub fn is_approved_for_all(e: Env, owner: Address, operator: Address) -> bool {
        storage::is_operator(&e, &owner, &operator)
    }

    // ========================================================================
    // NFT Transfer
    // ========================================================================

    /// Transfer NFT to new owner
    ///
    /// # Errors
    /// * `TokenNotFound` - If the NFT does not exist
    /// * `NotOwner` - If `from` is not the owner
    pub fn transfer(e: Env, from: Address, to: Address, token_id: u32) -> Result<(), NftError> {
        from.require_auth();

        Self::move_token(&e, &from, &to, token_id)
    }

    /// Transfer NFT on the owner's behalf
    ///
    /// `spender` must be the owner, the address approved for the token, or
    /// an operator of the owner.
    ///
    /// # Errors
    /// * `TokenNotFound` - If the NFT does not exist
    /// * `NotOwner` - If `from` is not the owner
    /// * `NotAuthorized` - If `spender` may not move the token
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), NftError> {
        spender.require_auth();

        let owner = storage::get_owner(&e, token_id).ok_or(NftError::TokenNotFound)?;
        let is_approved = storage::get_approved(&e, token_id).as_ref() == Some(&spender);
        if spender != owner && !is_approved && !storage::is_operator(&e, &owner, &spender) {
            ErrorHelper::log_error_with_context(
                &e,
                "transfer_from",
                "spender is not approved for token",
            );
            return Err(NftError::NotAuthorized);
        }

        Self::move_token(&e, &from, &to, token_id)
    }
}

impl BasicNft {
    fn move_token(e: &Env, from: &Address, to: &Address, token_id: u32) -> Result<(), NftError> {
        // Verify ownership
        let current_owner = storage::get_owner(e, token_id).ok_or(NftError::TokenNotFound)?;
        if current_owner != *from {
            return Err(NftError::NotOwner);
        }

        storage::clear_approved(e, token_id);
        storage::set_balance(e, from, storage::get_balance(e, from).saturating_sub(1));
        let to_balance = SafeMath::increment(storage::get_balance(e, to))
            .ok_or(NftError::TokenLimitReached)?;
        storage::set_balance(e, to, to_balance);
        storage::set_owner(e, token_id, to);
        Ttl::extend_instance(e);

        Events::emit_with_topics(
            e,
            (Symbol::new(e, "Transfer"), token_id),
            (from.clone(), to.clone()),
        );

        Ok(())
    }
}
