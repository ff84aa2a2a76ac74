#![no_main]

use arbitrary::Arbitrary;
use chef::{ChefContract, ChefContractClient};
use libfuzzer_sys::fuzz_target;
use reward_token::{RewardTokenContract, RewardTokenContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env, String,
};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { pool: u8, amount: u64 },
    Withdraw { pool: u8, amount: u64 },
    Harvest { pool: u8 },
    WithdrawFees { pool: u8, amount: u64 },
    SetDepositFee { pool: u8, fee: u16 },
    AdvanceBlocks { blocks: u8 },
    AdvanceTime { seconds: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let reward_id = env.register(RewardTokenContract, ());
    let reward = RewardTokenContractClient::new(&env, &reward_id);
    let token_owner = Address::generate(&env);
    reward.initialize(
        &token_owner,
        &18,
        &String::from_str(&env, "BabyDolz"),
        &String::from_str(&env, "BBZ"),
    );

    let chef_id = env.register(ChefContract, ());
    let client = ChefContractClient::new(&env, &chef_id);
    let admin = Address::generate(&env);
    client.initialize(&admin, &reward_id);
    reward.set_minter(&token_owner, &chef_id, &true);

    client.create_pool(&admin, &stake_token, &10_000_000, &20_000, &25, &0, &60);
    client.create_pool(&admin, &stake_token, &987_324, &726, &0, &1_000, &0);

    let mut users = vec![admin.clone()];
    for _ in 0..4 {
        let user = Address::generate(&env);
        StellarAssetClient::new(&env, &stake_token).mint(&user, &(u64::MAX as i128));
        users.push(user);
    }

    // Look for panics (unchecked arithmetic, broken invariants) rather than
    // exact balances.
    // Block advances stay well inside the default entry TTL.
    for (i, action) in actions.into_iter().take(128).enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Deposit { pool, amount } => {
                let _ = client.try_deposit(caller, &u32::from(pool % 3), &(amount as i128));
            }
            FuzzAction::Withdraw { pool, amount } => {
                let _ = client.try_withdraw(caller, &u32::from(pool % 3), &(amount as i128));
            }
            FuzzAction::Harvest { pool } => {
                let _ = client.try_harvest(caller, &u32::from(pool % 3));
            }
            FuzzAction::WithdrawFees { pool, amount } => {
                let _ = client.try_withdraw_fees(
                    caller,
                    &u32::from(pool % 3),
                    caller,
                    &(amount as i128),
                );
            }
            FuzzAction::SetDepositFee { pool, fee } => {
                let _ = client.try_set_deposit_fee(caller, &u32::from(pool % 3), &u32::from(fee));
            }
            FuzzAction::AdvanceBlocks { blocks } => {
                let sequence = env.ledger().sequence();
                env.ledger().set_sequence_number(sequence + u32::from(blocks % 16));
            }
            FuzzAction::AdvanceTime { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now + u64::from(seconds));
            }
        }

        for pool_id in 0..2u32 {
            let fees = client.get_collected_fees(&pool_id);
            assert!(fees >= 0, "collected fees went negative");
            let deposit = client.get_deposit(&pool_id, caller);
            assert!(deposit.amount >= 0, "deposit went negative");
            assert!(deposit.reward_block_start <= env.ledger().sequence());
        }
    }
});
