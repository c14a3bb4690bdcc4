#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Env, String};


/// Version reported by `version()`. Matches the aggregator interface version
/// the mock imitates.
const VERSION: u32 = 0;

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    RoundNotFound = 1,
}

/// One reported round, shaped like an aggregator's `latestRoundData` tuple.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Decimals,
    LatestRound,
    Round(u64),
}

#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    /// Create the feed with a fixed precision and a first answer.
    ///
    /// `initial_answer` is reported as round 1, timestamped with the current
    /// ledger time.
    pub fn __constructor(env: Env, decimals: u32, initial_answer: i128) {
        env.storage().instance().set(&DataKey::Decimals, &decimals);
        extend_instance_ttl(&env);
        Self::update_answer(env, initial_answer);
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::Decimals)
            .unwrap_or(0)
    }

    pub fn description(env: Env) -> String {
        String::from_str(&env, "mock price feed")
    }

    pub fn version(_env: Env) -> u32 {
        VERSION
    }

    /// Report a new answer as the next round.
    ///
    /// Mock only: there is no access control, any caller can move the price.
    pub fn update_answer(env: Env, answer: i128) {
        let now = env.ledger().timestamp();
        let round_id = latest_round(&env) + 1;
        save_round(
            &env,
            &RoundData {
                round_id,
                answer,
                started_at: now,
                updated_at: now,
                answered_in_round: round_id,
            },
        );
    }

    /// Overwrite a round with explicit timestamps and make it the latest.
    ///
    /// Lets tests fabricate old or in-flight rounds.
    pub fn update_round_data(
        env: Env,
        round_id: u64,
        answer: i128,
        updated_at: u64,
        started_at: u64,
    ) {
        save_round(
            &env,
            &RoundData {
                round_id,
                answer,
                started_at,
                updated_at,
                answered_in_round: round_id,
            },
        );
    }

    pub fn latest_round(env: Env) -> u64 {
        latest_round(&env)
    }

    pub fn latest_answer(env: Env) -> i128 {
        load_latest(&env).map(|r| r.answer).unwrap_or(0)
    }

    pub fn latest_timestamp(env: Env) -> u64 {
        load_latest(&env).map(|r| r.updated_at).unwrap_or(0)
    }

    pub fn latest_round_data(env: Env) -> Result<RoundData, Error> {
        load_latest(&env).ok_or(Error::RoundNotFound)
    }

    pub fn get_round_data(env: Env, round_id: u64) -> Result<RoundData, Error> {
        load_round(&env, round_id).ok_or(Error::RoundNotFound)
    }
}

fn latest_round(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::LatestRound)
        .unwrap_or(0)
}

fn load_round(env: &Env, round_id: u64) -> Option<RoundData> {
    env.storage().persistent().get(&DataKey::Round(round_id))
}

fn load_latest(env: &Env) -> Option<RoundData> {
    load_round(env, latest_round(env))
}

fn save_round(env: &Env, round: &RoundData) {
    let key = DataKey::Round(round.round_id);
    env.storage().persistent().set(&key, round);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
    env.storage()
        .instance()
        .set(&DataKey::LatestRound, &round.round_id);
    extend_instance_ttl(env);
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}
