#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub reward_token: Address,
    pub timestamp: u64,
}

/// Fired when the admin appends a pool to the registry.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolCreatedEvent {
    pub pool_id: u32,
    pub token: Address,
    pub amount_per_reward: i128,
    pub reward_per_block: i128,
    pub deposit_fee: u32,
    pub minimum_deposit: i128,
    pub lock_time: u64,
    pub timestamp: u64,
}

/// Fired when the admin changes a pool's deposit fee.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositFeeSetEvent {
    pub pool_id: u32,
    pub deposit_fee: u32,
    pub timestamp: u64,
}

/// Fired when the admin changes a pool's minimum deposit.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinimumDepositSetEvent {
    pub pool_id: u32,
    pub minimum_deposit: i128,
    pub timestamp: u64,
}

/// Fired when the admin changes a pool's lock time.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockTimeSetEvent {
    pub pool_id: u32,
    pub lock_time: u64,
    pub timestamp: u64,
}

/// Fired when a user deposits into a pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub pool_id: u32,
    pub account: Address,
    pub amount: i128,
    pub fee: i128,
    pub new_balance: i128,
    pub timestamp: u64,
}

/// Fired when a user withdraws principal from a pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub pool_id: u32,
    pub account: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub timestamp: u64,
}

/// Fired whenever settlement mints a non-zero reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub pool_id: u32,
    pub account: Address,
    pub reward: i128,
    pub block: u32,
    pub timestamp: u64,
}

/// Fired when the admin drains collected deposit fees.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawnEvent {
    pub pool_id: u32,
    pub recipient: Address,
    pub amount: i128,
    pub remaining: i128,
    pub timestamp: u64,
}

/// Fired when an admin transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub timestamp: u64,
}

/// Fired when an admin transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

/// Fired when a pending admin transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address, reward_token: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            reward_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

#[allow(clippy::too_many_arguments)]
pub fn publish_pool_created(
    env: &Env,
    pool_id: u32,
    token: Address,
    amount_per_reward: i128,
    reward_per_block: i128,
    deposit_fee: u32,
    minimum_deposit: i128,
    lock_time: u64,
) {
    env.events().publish(
        (symbol_short!("POOL_NEW"), pool_id),
        PoolCreatedEvent {
            pool_id,
            token,
            amount_per_reward,
            reward_per_block,
            deposit_fee,
            minimum_deposit,
            lock_time,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposit_fee_set(env: &Env, pool_id: u32, deposit_fee: u32) {
    env.events().publish(
        (symbol_short!("FEE_SET"), pool_id),
        DepositFeeSetEvent {
            pool_id,
            deposit_fee,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_minimum_deposit_set(env: &Env, pool_id: u32, minimum_deposit: i128) {
    env.events().publish(
        (symbol_short!("MIN_SET"), pool_id),
        MinimumDepositSetEvent {
            pool_id,
            minimum_deposit,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_lock_time_set(env: &Env, pool_id: u32, lock_time: u64) {
    env.events().publish(
        (symbol_short!("LOCK_SET"), pool_id),
        LockTimeSetEvent {
            pool_id,
            lock_time,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposited(
    env: &Env,
    pool_id: u32,
    account: Address,
    amount: i128,
    fee: i128,
    new_balance: i128,
) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), pool_id, account.clone()),
        DepositedEvent {
            pool_id,
            account,
            amount,
            fee,
            new_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, pool_id: u32, account: Address, amount: i128, new_balance: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), pool_id, account.clone()),
        WithdrawnEvent {
            pool_id,
            account,
            amount,
            new_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_paid(env: &Env, pool_id: u32, account: Address, reward: i128) {
    env.events().publish(
        (symbol_short!("REWARD"), pool_id, account.clone()),
        RewardPaidEvent {
            pool_id,
            account,
            reward,
            block: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_fees_withdrawn(
    env: &Env,
    pool_id: u32,
    recipient: Address,
    amount: i128,
    remaining: i128,
) {
    env.events().publish(
        (symbol_short!("FEE_WDRW"), pool_id),
        FeesWithdrawnEvent {
            pool_id,
            recipient,
            amount,
            remaining,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
