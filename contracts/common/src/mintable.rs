use soroban_sdk::{contractclient, Address, Env};

/// Capability surface of a reward token the staking engine mints from.
///
/// `mint` must fail unless `minter` has been granted mint authority by the
/// token's owner; callers use `try_mint` to turn that failure into an error
/// of their own.
#[contractclient(name = "MintableTokenClient")]
pub trait MintableTokenInterface {
    /// Mint `amount` new tokens to `to`, authorised by `minter`.
    fn mint(env: Env, minter: Address, to: Address, amount: i128);

    /// Return the token balance held by `id`.
    fn balance(env: Env, id: Address) -> i128;
}
