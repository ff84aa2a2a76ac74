use soroban_sdk::{Env, IntoVal, Val};

/// Ledgers closed per day at a 5 second close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Remaining-ledger threshold below which an entry's TTL is bumped.
pub const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
/// Ledger count an entry's TTL is extended to once the threshold is crossed.
pub const TTL_EXTEND_TO: u32 = 120 * DAY_IN_LEDGERS;

/// Extends the time-to-live of a persistent storage entry.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the time-to-live for instance storage.
/// Instance storage TTL applies to all keys in the instance storage.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}
