// contracts/fund_me/src/storage.rs
//
// Storage helpers for FundMe.
//
//   - Config                → instance storage, lives as long as the contract
//   - AmountFunded(funder)  → persistent, i128, absent means 0
//   - FunderCount           → persistent, u32, absent means 0
//   - Funder(index)         → persistent, Address, valid below FunderCount

use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    types::{Config, DataKey},
    Error,
};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

// ─────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

/// Load the constructor parameters. Panics with `Error::NotInitialized` if the
/// instance was never constructed.
pub fn load_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

// ─────────────────────────────────────────────────────────
// Contribution record
// ─────────────────────────────────────────────────────────

/// Amount `funder` contributed since the last withdrawal. 0 if none.
pub fn get_amount_funded(env: &Env, funder: &Address) -> i128 {
    let key = DataKey::AmountFunded(funder.clone());
    let amount = env.storage().persistent().get(&key);
    if amount.is_some() {
        extend_persistent_ttl(env, &key);
    }
    amount.unwrap_or(0)
}

pub fn set_amount_funded(env: &Env, funder: &Address, amount: i128) {
    let key = DataKey::AmountFunded(funder.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}

/// Drop the record for `funder`; later reads return 0.
pub fn reset_amount_funded(env: &Env, funder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::AmountFunded(funder.clone()));
}

// ─────────────────────────────────────────────────────────
// Funder sequence
// ─────────────────────────────────────────────────────────

/// Number of entries in the funder sequence.
pub fn funder_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::FunderCount)
        .unwrap_or(0)
}

fn set_funder_count(env: &Env, count: u32) {
    env.storage().persistent().set(&DataKey::FunderCount, &count);
    extend_persistent_ttl(env, &DataKey::FunderCount);
}

/// Append `funder` at position `funder_count`.
pub fn push_funder(env: &Env, funder: &Address) {
    let index = funder_count(env);
    let key = DataKey::Funder(index);
    env.storage().persistent().set(&key, funder);
    extend_persistent_ttl(env, &key);
    set_funder_count(env, index + 1);
}

/// Funder at `index`, or `None` past the end.
pub fn funder_at(env: &Env, index: u32) -> Option<Address> {
    if index >= funder_count(env) {
        return None;
    }
    load_funder(env, index)
}

/// Raw read of slot `index` with no bounds check. Slots at or past
/// `funder_count` may hold funders from before the last clear.
pub fn load_funder(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Funder(index))
}

/// Empty the sequence. Old slots are left in place and overwritten by
/// later `push_funder` calls.
pub fn clear_funders(env: &Env) {
    set_funder_count(env, 0);
}

// ─────────────────────────────────────────────────────────
// TTL management
// ─────────────────────────────────────────────────────────

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
