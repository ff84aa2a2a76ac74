#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for the fee collector and withdrawal guards.
//!
//! Invariants tested:
//! - A deposit of `D` at fee `f` adds exactly `floor(D × f / 1000)` to the
//!   accumulator and `D − floor(D × f / 1000)` to the deposit
//! - Fee withdrawal never exceeds the accumulator
//! - Over-withdrawal of principal is rejected and leaves the ledger intact

use chef::ContractError;
use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

use crate::setup::{advance_blocks, create_pool, funded_user, setup_test_env};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_deposit_fee_split(
        amounts in proptest::collection::vec(0i128..=1_000_000_000_000i128, 1..5),
        deposit_fee in 0u32..=1_000u32,
    ) {
        let ctx = setup_test_env();
        let pool_id = create_pool(&ctx, 10_000_000, 20_000, deposit_fee);
        let total: i128 = amounts.iter().sum();
        let user = funded_user(&ctx, total + 1);

        for amount in &amounts {
            let fees_before = ctx.chef.get_collected_fees(&pool_id);
            let balance_before = ctx.chef.get_deposit(&pool_id, &user).amount;

            ctx.chef.deposit(&user, &pool_id, amount);

            let fee = amount * i128::from(deposit_fee) / 1_000;
            prop_assert_eq!(ctx.chef.get_collected_fees(&pool_id), fees_before + fee);
            prop_assert_eq!(
                ctx.chef.get_deposit(&pool_id, &user).amount,
                balance_before + amount - fee
            );
        }
    }

    #[test]
    fn prop_fee_withdrawal_bounded_by_accumulator(
        amount in 1i128..=1_000_000_000_000i128,
        deposit_fee in 1u32..=1_000u32,
        excess in 1i128..=1_000_000i128,
    ) {
        let ctx = setup_test_env();
        let pool_id = create_pool(&ctx, 10_000_000, 20_000, deposit_fee);
        let user = funded_user(&ctx, amount);
        let treasury = Address::generate(&ctx.env);

        ctx.chef.deposit(&user, &pool_id, &amount);
        let collected = ctx.chef.get_collected_fees(&pool_id);

        let result = ctx.chef.try_withdraw_fees(
            &ctx.admin,
            &pool_id,
            &treasury,
            &(collected + excess),
        );
        match result {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::ExceedsCollectedFees),
            _ => prop_assert!(false, "Expected ExceedsCollectedFees error"),
        }
        prop_assert_eq!(ctx.chef.get_collected_fees(&pool_id), collected);

        ctx.chef.withdraw_fees(&ctx.admin, &pool_id, &treasury, &collected);
        prop_assert_eq!(ctx.chef.get_collected_fees(&pool_id), 0);
    }

    #[test]
    fn prop_over_withdraw_rejected(
        amount in 1i128..=1_000_000_000_000i128,
        excess in 1i128..=1_000_000i128,
        blocks in 0u32..=100u32,
    ) {
        let ctx = setup_test_env();
        let pool_id = create_pool(&ctx, 10_000_000, 20_000, 0);
        let user = funded_user(&ctx, amount);

        ctx.chef.deposit(&user, &pool_id, &amount);
        advance_blocks(&ctx.env, blocks);
        let before = ctx.chef.get_deposit(&pool_id, &user);

        match ctx.chef.try_withdraw(&user, &pool_id, &(amount + excess)) {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::InsufficientBalance),
            _ => prop_assert!(false, "Expected InsufficientBalance error"),
        }
        prop_assert_eq!(ctx.chef.get_deposit(&pool_id, &user), before);

        ctx.chef.withdraw(&user, &pool_id, &amount);
        prop_assert_eq!(ctx.chef.get_deposit(&pool_id, &user).amount, 0);
    }
}
