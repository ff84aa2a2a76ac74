#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

/// Fired when the owner grants or revokes mint authority.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterSetEvent {
    pub minter: Address,
    pub enabled: bool,
    pub timestamp: u64,
}

/// Fired for every successful mint.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintedEvent {
    pub minter: Address,
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn publish_minter_set(env: &Env, minter: Address, enabled: bool) {
    env.events().publish(
        (symbol_short!("MINTER"), minter.clone()),
        MinterSetEvent {
            minter,
            enabled,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_minted(env: &Env, minter: Address, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("MINT"), to.clone()),
        MintedEvent {
            minter,
            to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
