extern crate std;

use soroban_sdk::{
    testutils::Address as _,
    token::StellarAssetClient,
    Address, Env,
};

use crate::{ChefContract, ChefContractClient, ContractError};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, ChefContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    // Access checks never reach the reward token.
    let reward_token = Address::generate(&env);

    let contract_id = env.register(ChefContract, ());
    let client = ChefContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &reward_token);
    client.create_pool(&admin, &stake_token, &10_000_000, &20_000, &10, &0, &0);

    (env, client, admin, stake_token)
}

macro_rules! assert_unauthorized {
    ($result:expr) => {
        match $result {
            Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
            _ => unreachable!("Expected Unauthorized error"),
        }
    };
}

// ── Administrator-only operations ────────────────────────────────────────────

#[test]
fn test_non_admin_cannot_create_pool() {
    let (env, client, _admin, stake_token) = setup();
    let stranger = Address::generate(&env);

    assert_unauthorized!(client.try_create_pool(
        &stranger,
        &stake_token,
        &10_000_000,
        &20_000,
        &0,
        &0,
        &0,
    ));
    assert_eq!(client.get_pool_count(), 1);
}

#[test]
fn test_non_admin_cannot_set_deposit_fee() {
    let (env, client, _admin, _) = setup();
    let stranger = Address::generate(&env);

    assert_unauthorized!(client.try_set_deposit_fee(&stranger, &0, &999));
    assert_eq!(client.get_pool(&0).deposit_fee, 10);
}

#[test]
fn test_non_admin_cannot_set_minimum_deposit() {
    let (env, client, _admin, _) = setup();
    let stranger = Address::generate(&env);

    assert_unauthorized!(client.try_set_minimum_deposit(&stranger, &0, &1_000_000));
    assert_eq!(client.get_pool(&0).minimum_deposit, 0);
}

#[test]
fn test_non_admin_cannot_set_lock_time() {
    let (env, client, _admin, _) = setup();
    let stranger = Address::generate(&env);

    assert_unauthorized!(client.try_set_lock_time(&stranger, &0, &u64::MAX));
    assert_eq!(client.get_pool(&0).lock_time, 0);
}

#[test]
fn test_non_admin_cannot_withdraw_fees() {
    let (env, client, _admin, stake_token) = setup();
    let user = Address::generate(&env);
    StellarAssetClient::new(&env, &stake_token).mint(&user, &10_000);
    client.deposit(&user, &0, &10_000);
    assert_eq!(client.get_collected_fees(&0), 100);

    // Depositors have no claim on the fee accumulator either.
    assert_unauthorized!(client.try_withdraw_fees(&user, &0, &user, &100));
    assert_eq!(client.get_collected_fees(&0), 100);
}

// ── Admin transfer (two-step) ────────────────────────────────────────────────

#[test]
fn test_admin_transfer_flow() {
    let (env, client, admin, stake_token) = setup();
    let new_admin = Address::generate(&env);

    client.propose_admin(&admin, &new_admin);
    assert_eq!(client.get_pending_admin(), Some(new_admin.clone()));
    // Nothing changes until the transfer is accepted.
    assert_eq!(client.get_admin(), admin);

    client.accept_admin(&new_admin);
    assert_eq!(client.get_admin(), new_admin);
    assert_eq!(client.get_pending_admin(), None);

    // Old admin loses its privileges, the new one gains them.
    assert_unauthorized!(client.try_set_lock_time(&admin, &0, &60));
    client.set_lock_time(&new_admin, &0, &60);
    client.create_pool(&new_admin, &stake_token, &1, &1, &0, &0, &0);
    assert_eq!(client.get_pool_count(), 2);
}

#[test]
fn test_only_admin_can_propose() {
    let (env, client, _admin, _) = setup();
    let stranger = Address::generate(&env);

    assert_unauthorized!(client.try_propose_admin(&stranger, &stranger));
    assert_eq!(client.get_pending_admin(), None);
}

#[test]
fn test_only_proposed_admin_can_accept() {
    let (env, client, admin, _) = setup();
    let new_admin = Address::generate(&env);
    let stranger = Address::generate(&env);

    client.propose_admin(&admin, &new_admin);
    assert_unauthorized!(client.try_accept_admin(&stranger));
    assert_eq!(client.get_admin(), admin);
}

#[test]
fn test_accept_without_proposal_fails() {
    let (env, client, _admin, _) = setup();
    let someone = Address::generate(&env);

    match client.try_accept_admin(&someone) {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidInput),
        _ => unreachable!("Expected InvalidInput error"),
    }
}

#[test]
fn test_cancel_admin_transfer() {
    let (env, client, admin, _) = setup();
    let new_admin = Address::generate(&env);

    client.propose_admin(&admin, &new_admin);
    client.cancel_admin_transfer(&admin);

    assert_eq!(client.get_pending_admin(), None);
    assert!(client.try_accept_admin(&new_admin).is_err());
    assert_eq!(client.get_admin(), admin);
}
