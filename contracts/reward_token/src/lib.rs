#![no_std]

pub mod events;

use common::ttl;
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const DECIMALS: Symbol = symbol_short!("DECIMALS");
const NAME: Symbol = symbol_short!("NAME");
const SYMBOL: Symbol = symbol_short!("SYMBOL");
const SUPPLY: Symbol = symbol_short!("SUPPLY");

// Per-account persistent storage uses tuple keys:  (prefix, address)
const BALANCE: Symbol = symbol_short!("BAL");
const MINTER: Symbol = symbol_short!("MINTER");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TokenError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotMinter = 4,
    InvalidAmount = 5,
    Overflow = 6,
}

// ── Contract ─────────────────────────────────────────────────────────────────

/// Reward asset paid out by staking pools.
///
/// Supply only grows through `mint`, and only addresses the owner has flagged
/// as minters may call it.
#[contract]
pub struct RewardTokenContract;

#[contractimpl]
impl RewardTokenContract {
    pub fn initialize(
        env: Env,
        owner: Address,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError> {
        if env.storage().instance().has(&OWNER) {
            return Err(TokenError::AlreadyInitialized);
        }

        env.storage().instance().set(&OWNER, &owner);
        env.storage().instance().set(&DECIMALS, &decimals);
        env.storage().instance().set(&NAME, &name);
        env.storage().instance().set(&SYMBOL, &symbol);
        env.storage().instance().set(&SUPPLY, &0i128);
        ttl::extend_instance(&env);

        Ok(())
    }

    // ── Minter management ───────────────────────────────────────────────────

    /// Grant or revoke mint authority. Only the owner can call this.
    pub fn set_minter(
        env: Env,
        owner: Address,
        minter: Address,
        enabled: bool,
    ) -> Result<(), TokenError> {
        owner.require_auth();
        Self::require_owner(&env, &owner)?;

        let key = (MINTER, minter.clone());
        env.storage().persistent().set(&key, &enabled);
        ttl::extend_persistent(&env, &key);

        events::publish_minter_set(&env, minter, enabled);

        Ok(())
    }

    pub fn is_minter(env: Env, account: Address) -> bool {
        env.storage()
            .persistent()
            .get(&(MINTER, account))
            .unwrap_or(false)
    }

    // ── Supply ──────────────────────────────────────────────────────────────

    /// Mint `amount` new tokens to `to`.
    ///
    /// `minter` must authorise the call and hold the minter flag.
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        Self::require_initialized(&env)?;
        minter.require_auth();

        if amount < 0 {
            return Err(TokenError::InvalidAmount);
        }
        if !Self::is_minter(env.clone(), minter.clone()) {
            return Err(TokenError::NotMinter);
        }

        let key = (BALANCE, to.clone());
        let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        let new_balance = balance
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        let supply: i128 = env.storage().instance().get(&SUPPLY).unwrap_or(0);
        let new_supply = supply.checked_add(amount).ok_or(TokenError::Overflow)?;

        env.storage().persistent().set(&key, &new_balance);
        ttl::extend_persistent(&env, &key);
        env.storage().instance().set(&SUPPLY, &new_supply);

        events::publish_minted(&env, minter, to, amount);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&(BALANCE, id))
            .unwrap_or(0)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage().instance().get(&SUPPLY).unwrap_or(0)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        env.storage()
            .instance()
            .get(&DECIMALS)
            .ok_or(TokenError::NotInitialized)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        env.storage()
            .instance()
            .get(&NAME)
            .ok_or(TokenError::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        env.storage()
            .instance()
            .get(&SYMBOL)
            .ok_or(TokenError::NotInitialized)
    }

    pub fn get_owner(env: Env) -> Result<Address, TokenError> {
        env.storage()
            .instance()
            .get(&OWNER)
            .ok_or(TokenError::NotInitialized)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), TokenError> {
        if !env.storage().instance().has(&OWNER) {
            return Err(TokenError::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), TokenError> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&OWNER)
            .ok_or(TokenError::NotInitialized)?;
        if *caller != owner {
            return Err(TokenError::Unauthorized);
        }
        Ok(())
    }
}
