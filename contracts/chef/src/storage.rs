//! Pool registry and deposit ledger storage.
//!
//! Pools live under `(POOL, id)` with ids handed out densely from `POOL_CTR`,
//! so the registry is append-only. Deposits live under
//! `(DEPOSIT, pool_id, account)` and read as zero until first written.

use common::ttl;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{ContractError, DepositInfo, Pool};

const POOL_CTR: Symbol = symbol_short!("POOL_CTR");
const POOL: Symbol = symbol_short!("POOL");
const DEPOSIT: Symbol = symbol_short!("DEPOSIT");

fn pool_key(pool_id: u32) -> (Symbol, u32) {
    (POOL, pool_id)
}

fn deposit_key(pool_id: u32, account: &Address) -> (Symbol, u32, Address) {
    (DEPOSIT, pool_id, account.clone())
}

// ── Pool registry ────────────────────────────────────────────────────────────

pub fn pool_count(env: &Env) -> u32 {
    env.storage().instance().get(&POOL_CTR).unwrap_or(0)
}

/// Append `pool` to the registry and return its id.
pub fn push_pool(env: &Env, pool: &Pool) -> Result<u32, ContractError> {
    let pool_id = pool_count(env);
    let next = pool_id.checked_add(1).ok_or(ContractError::MathOverflow)?;

    store_pool(env, pool_id, pool);
    env.storage().instance().set(&POOL_CTR, &next);

    Ok(pool_id)
}

pub fn load_pool(env: &Env, pool_id: u32) -> Result<Pool, ContractError> {
    let key = pool_key(pool_id);
    let pool: Pool = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::PoolNotFound)?;
    ttl::extend_persistent(env, &key);
    Ok(pool)
}

pub fn store_pool(env: &Env, pool_id: u32, pool: &Pool) {
    let key = pool_key(pool_id);
    env.storage().persistent().set(&key, pool);
    ttl::extend_persistent(env, &key);
}

// ── Deposit ledger ───────────────────────────────────────────────────────────

pub fn load_deposit(env: &Env, pool_id: u32, account: &Address) -> DepositInfo {
    let key = deposit_key(pool_id, account);
    match env.storage().persistent().get::<_, DepositInfo>(&key) {
        Some(deposit) => {
            ttl::extend_persistent(env, &key);
            deposit
        }
        None => DepositInfo::default(),
    }
}

pub fn store_deposit(env: &Env, pool_id: u32, account: &Address, deposit: &DepositInfo) {
    let key = deposit_key(pool_id, account);
    env.storage().persistent().set(&key, deposit);
    ttl::extend_persistent(env, &key);
}
