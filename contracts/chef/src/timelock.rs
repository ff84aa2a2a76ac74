//! Withdrawal lock gate.
//!
//! A deposit's principal unlocks `lock_time` seconds after its most recent
//! deposit. Reward harvesting never consults this module.

/// Timestamp at which principal deposited at `deposit_timestamp` unlocks.
pub fn unlock_at(deposit_timestamp: u64, lock_time: u64) -> u64 {
    deposit_timestamp.saturating_add(lock_time)
}

/// `true` once `now` has reached the unlock timestamp.
pub fn is_unlocked(now: u64, deposit_timestamp: u64, lock_time: u64) -> bool {
    now >= unlock_at(deposit_timestamp, lock_time)
}
