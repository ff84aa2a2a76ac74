#![no_std]

pub mod events;
pub mod rewards;
pub mod storage;
pub mod timelock;

use common::{ttl, MintableTokenClient};
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");
const INITIALIZED: Symbol = symbol_short!("INIT");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    PoolNotFound = 5,
    BelowMinimumDeposit = 6,
    InsufficientBalance = 7,
    LockNotExpired = 8,
    ExceedsCollectedFees = 9,
    TransferFailed = 10,
    RewardMintFailed = 11,
    MathOverflow = 12,
}

// ── Public-facing types (re-exported for test consumers) ─────────────────────

/// Configuration and fee accumulator of one staking pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    /// Token accepted for staking. Never changes after creation.
    pub token: Address,
    /// Divisor applied to `amount × reward_per_block × blocks`.
    pub amount_per_reward: i128,
    pub reward_per_block: i128,
    /// Parts per thousand taken from every deposit.
    pub deposit_fee: u32,
    pub minimum_deposit: i128,
    /// Seconds after the latest deposit before principal can be withdrawn.
    pub lock_time: u64,
    /// Fees taken and not yet withdrawn by the admin.
    pub collected_fees: i128,
}

/// One account's position in one pool.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DepositInfo {
    /// Staked principal net of deposit fees.
    pub amount: i128,
    /// Ledger sequence of the last reward settlement.
    pub reward_block_start: u32,
    /// Ledger timestamp of the latest deposit.
    pub deposit_timestamp: u64,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct ChefContract;

#[contractimpl]
impl ChefContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `admin`        – sole address allowed to manage pools and fees.
    /// * `reward_token` – token minted as rewards; it must grant this
    ///                    contract mint authority before rewards can settle.
    pub fn initialize(env: Env, admin: Address, reward_token: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        ttl::extend_instance(&env);

        events::publish_initialized(&env, admin, reward_token);

        Ok(())
    }

    // ── Pool registry ───────────────────────────────────────────────────────

    /// Append a new pool and return its id (the previous pool count).
    #[allow(clippy::too_many_arguments)]
    pub fn create_pool(
        env: Env,
        caller: Address,
        token: Address,
        amount_per_reward: i128,
        reward_per_block: i128,
        deposit_fee: u32,
        minimum_deposit: i128,
        lock_time: u64,
    ) -> Result<u32, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if amount_per_reward <= 0 || reward_per_block < 0 || minimum_deposit < 0 {
            return Err(ContractError::InvalidInput);
        }

        let pool = Pool {
            token: token.clone(),
            amount_per_reward,
            reward_per_block,
            deposit_fee,
            minimum_deposit,
            lock_time,
            collected_fees: 0,
        };
        let pool_id = storage::push_pool(&env, &pool)?;
        ttl::extend_instance(&env);

        events::publish_pool_created(
            &env,
            pool_id,
            token,
            amount_per_reward,
            reward_per_block,
            deposit_fee,
            minimum_deposit,
            lock_time,
        );

        Ok(pool_id)
    }

    /// Set the deposit fee of a pool, in parts per thousand.
    pub fn set_deposit_fee(
        env: Env,
        caller: Address,
        pool_id: u32,
        deposit_fee: u32,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let mut pool = storage::load_pool(&env, pool_id)?;
        pool.deposit_fee = deposit_fee;
        storage::store_pool(&env, pool_id, &pool);

        events::publish_deposit_fee_set(&env, pool_id, deposit_fee);

        Ok(())
    }

    pub fn set_minimum_deposit(
        env: Env,
        caller: Address,
        pool_id: u32,
        minimum_deposit: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if minimum_deposit < 0 {
            return Err(ContractError::InvalidInput);
        }

        let mut pool = storage::load_pool(&env, pool_id)?;
        pool.minimum_deposit = minimum_deposit;
        storage::store_pool(&env, pool_id, &pool);

        events::publish_minimum_deposit_set(&env, pool_id, minimum_deposit);

        Ok(())
    }

    /// Set the lock time of a pool. Applies to existing deposits too, since
    /// the gate is evaluated against the pool's current value.
    pub fn set_lock_time(
        env: Env,
        caller: Address,
        pool_id: u32,
        lock_time: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let mut pool = storage::load_pool(&env, pool_id)?;
        pool.lock_time = lock_time;
        storage::store_pool(&env, pool_id, &pool);

        events::publish_lock_time_set(&env, pool_id, lock_time);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` of the pool's token.
    ///
    /// Pending reward is settled first, then the tokens are pulled in, the
    /// fee is split off into the pool's accumulator and the remainder is
    /// credited. Every deposit restarts the withdrawal lock.
    pub fn deposit(
        env: Env,
        account: Address,
        pool_id: u32,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        account.require_auth();

        if amount < 0 {
            return Err(ContractError::InvalidInput);
        }

        let mut pool = storage::load_pool(&env, pool_id)?;
        if amount < pool.minimum_deposit {
            return Err(ContractError::BelowMinimumDeposit);
        }

        let mut deposit = storage::load_deposit(&env, pool_id, &account);

        // 1. Pay out what the previous balance earned.
        Self::settle(&env, pool_id, &pool, &account, &mut deposit)?;

        // 2. Take custody before crediting anything.
        Self::transfer_token(
            &env,
            &pool.token,
            &account,
            &env.current_contract_address(),
            amount,
        )?;

        // 3. Split the fee and credit the rest.
        let (fee, credited) = rewards::split_deposit_fee(amount, pool.deposit_fee)
            .ok_or(ContractError::MathOverflow)?;
        pool.collected_fees = pool
            .collected_fees
            .checked_add(fee)
            .ok_or(ContractError::MathOverflow)?;
        deposit.amount = deposit
            .amount
            .checked_add(credited)
            .ok_or(ContractError::MathOverflow)?;
        deposit.reward_block_start = env.ledger().sequence();
        deposit.deposit_timestamp = env.ledger().timestamp();

        storage::store_pool(&env, pool_id, &pool);
        storage::store_deposit(&env, pool_id, &account, &deposit);

        events::publish_deposited(&env, pool_id, account, amount, fee, deposit.amount);

        Ok(())
    }

    /// Withdraw `amount` of principal once the pool's lock time has passed
    /// since the account's latest deposit.
    pub fn withdraw(
        env: Env,
        account: Address,
        pool_id: u32,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        account.require_auth();

        if amount < 0 {
            return Err(ContractError::InvalidInput);
        }

        let pool = storage::load_pool(&env, pool_id)?;
        let mut deposit = storage::load_deposit(&env, pool_id, &account);

        if !timelock::is_unlocked(
            env.ledger().timestamp(),
            deposit.deposit_timestamp,
            pool.lock_time,
        ) {
            return Err(ContractError::LockNotExpired);
        }

        Self::settle(&env, pool_id, &pool, &account, &mut deposit)?;

        if amount > deposit.amount {
            return Err(ContractError::InsufficientBalance);
        }

        // Debit before paying out (checks-effects-interactions).
        deposit.amount -= amount;
        storage::store_deposit(&env, pool_id, &account, &deposit);

        Self::transfer_token(
            &env,
            &pool.token,
            &env.current_contract_address(),
            &account,
            amount,
        )?;

        events::publish_withdrawn(&env, pool_id, account, amount, deposit.amount);

        Ok(())
    }

    /// Settle and return the reward accrued in `pool_id`.
    ///
    /// Never gated by the lock time. A second harvest in the same ledger
    /// returns 0.
    pub fn harvest(env: Env, account: Address, pool_id: u32) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        account.require_auth();

        let pool = storage::load_pool(&env, pool_id)?;
        let mut deposit = storage::load_deposit(&env, pool_id, &account);

        let reward = Self::settle(&env, pool_id, &pool, &account, &mut deposit)?;
        storage::store_deposit(&env, pool_id, &account, &deposit);

        Ok(reward)
    }

    // ── Fee collector ───────────────────────────────────────────────────────

    /// Send `amount` of a pool's collected deposit fees to `recipient`.
    pub fn withdraw_fees(
        env: Env,
        caller: Address,
        pool_id: u32,
        recipient: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if amount < 0 {
            return Err(ContractError::InvalidInput);
        }

        let mut pool = storage::load_pool(&env, pool_id)?;
        if amount > pool.collected_fees {
            return Err(ContractError::ExceedsCollectedFees);
        }

        pool.collected_fees -= amount;
        storage::store_pool(&env, pool_id, &pool);

        Self::transfer_token(
            &env,
            &pool.token,
            &env.current_contract_address(),
            &recipient,
            amount,
        )?;

        events::publish_fees_withdrawn(&env, pool_id, recipient, amount, pool.collected_fees);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Reward `account` would receive if it settled in the current ledger.
    pub fn pending_reward(env: Env, pool_id: u32, account: Address) -> Result<i128, ContractError> {
        let pool = storage::load_pool(&env, pool_id)?;
        let deposit = storage::load_deposit(&env, pool_id, &account);

        rewards::compute_reward(
            deposit.amount,
            pool.reward_per_block,
            deposit.reward_block_start,
            env.ledger().sequence(),
            pool.amount_per_reward,
        )
        .ok_or(ContractError::MathOverflow)
    }

    pub fn get_pool(env: Env, pool_id: u32) -> Result<Pool, ContractError> {
        storage::load_pool(&env, pool_id)
    }

    pub fn get_pool_count(env: Env) -> u32 {
        storage::pool_count(&env)
    }

    /// Return the deposit record of `account`; zero-valued if it never
    /// interacted with the pool.
    pub fn get_deposit(env: Env, pool_id: u32, account: Address) -> Result<DepositInfo, ContractError> {
        storage::load_pool(&env, pool_id)?;
        Ok(storage::load_deposit(&env, pool_id, &account))
    }

    pub fn get_collected_fees(env: Env, pool_id: u32) -> Result<i128, ContractError> {
        Ok(storage::load_pool(&env, pool_id)?.collected_fees)
    }

    /// Timestamp from which `account` may withdraw principal from `pool_id`.
    pub fn get_unlock_time(env: Env, pool_id: u32, account: Address) -> Result<u64, ContractError> {
        let pool = storage::load_pool(&env, pool_id)?;
        let deposit = storage::load_deposit(&env, pool_id, &account);
        Ok(timelock::unlock_at(deposit.deposit_timestamp, pool.lock_time))
    }

    pub fn get_reward_token(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new admin address. Only the current admin can call this.
    /// The new admin must call `accept_admin` to complete the transfer.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        env.storage().instance().set(&PENDING_ADMIN, &new_admin);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Accept the pending admin transfer. Only the proposed new admin can call this.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_admin.require_auth();

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::InvalidInput)?;

        if new_admin != pending {
            return Err(ContractError::Unauthorized);
        }

        let old_admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)?;

        env.storage().instance().set(&ADMIN, &new_admin);
        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);

        Ok(())
    }

    /// Cancel a pending admin transfer. Only the current admin can call this.
    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::InvalidInput)?;

        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);

        Ok(())
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&PENDING_ADMIN)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the stored admin.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Mint everything `deposit` has accrued and move its checkpoint to the
    /// current ledger.
    ///
    /// The checkpoint moves even when nothing is owed. The caller is
    /// responsible for persisting `deposit`.
    fn settle(
        env: &Env,
        pool_id: u32,
        pool: &Pool,
        account: &Address,
        deposit: &mut DepositInfo,
    ) -> Result<i128, ContractError> {
        let current_block = env.ledger().sequence();
        let reward = rewards::compute_reward(
            deposit.amount,
            pool.reward_per_block,
            deposit.reward_block_start,
            current_block,
            pool.amount_per_reward,
        )
        .ok_or(ContractError::MathOverflow)?;

        if reward > 0 {
            let reward_token: Address = env
                .storage()
                .instance()
                .get(&REWARD_TOKEN)
                .ok_or(ContractError::NotInitialized)?;
            let minted = MintableTokenClient::new(env, &reward_token).try_mint(
                &env.current_contract_address(),
                account,
                &reward,
            );
            if !matches!(minted, Ok(Ok(()))) {
                return Err(ContractError::RewardMintFailed);
            }

            events::publish_reward_paid(env, pool_id, account.clone(), reward);
        }

        deposit.reward_block_start = current_block;

        Ok(reward)
    }

    /// Move `amount` of `token`, mapping a declined transfer to
    /// `TransferFailed`. Zero amounts are not forwarded.
    fn transfer_token(
        env: &Env,
        token: &Address,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        if amount == 0 {
            return Ok(());
        }
        let result = token::Client::new(env, token).try_transfer(from, to, &amount);
        if !matches!(result, Ok(Ok(()))) {
            return Err(ContractError::TransferFailed);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_access;
