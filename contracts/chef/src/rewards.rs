//! Block-quantized reward accrual and deposit-fee arithmetic.
//!
//! Everything here is pure so the same formulas back both the settling entry
//! points and the read-only `pending_reward` view.

/// Deposit fees are expressed in parts per thousand.
pub const FEE_DENOMINATOR: i128 = 1_000;

/// Reward owed to a deposit since its accrual checkpoint.
///
/// ```text
/// reward = amount × reward_per_block × (current_block − start_block) / amount_per_reward
/// ```
///
/// The product is formed first and divided once, so the result is floored
/// exactly once. Returns `None` on overflow or a zero divisor.
pub fn compute_reward(
    amount: i128,
    reward_per_block: i128,
    start_block: u32,
    current_block: u32,
    amount_per_reward: i128,
) -> Option<i128> {
    let blocks_elapsed = current_block.saturating_sub(start_block);
    if blocks_elapsed == 0 || amount == 0 {
        return Some(0);
    }

    amount
        .checked_mul(reward_per_block)?
        .checked_mul(i128::from(blocks_elapsed))?
        .checked_div(amount_per_reward)
}

/// Split a deposit into `(fee, credited)` for a fee of `fee_per_mille`.
///
/// Returns `None` when the fee would exceed the deposit itself.
pub fn split_deposit_fee(amount: i128, fee_per_mille: u32) -> Option<(i128, i128)> {
    let fee = amount
        .checked_mul(i128::from(fee_per_mille))?
        .checked_div(FEE_DENOMINATOR)?;
    let credited = amount.checked_sub(fee)?;
    if credited < 0 {
        return None;
    }
    Some((fee, credited))
}
