#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env};

mod events;
mod funding;
mod price_converter;
mod storage;
mod types;
mod withdraw;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use price_converter::{
    PriceFeed, PriceFeedClient, RoundData, PRICE_MAX_AGE, REFERENCE_DECIMALS,
};
pub use types::Config;

/// Smallest accepted contribution: 50 USD with `REFERENCE_DECIMALS` decimals.
pub const MINIMUM_USD: i128 = 50 * 10i128.pow(REFERENCE_DECIMALS);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InsufficientAmount = 1,
    NotOwner = 2,
    TransferFailed = 3,
    IndexOutOfRange = 4,
    PriceFeedUnavailable = 5,
    InvalidPrice = 6,
    StalePrice = 7,
    ArithmeticOverflow = 8,
    NotInitialized = 9,
}

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    /// Bind the contract to its owner, oracle and native token.
    ///
    /// All three are fixed for the lifetime of the instance.
    pub fn __constructor(env: Env, owner: Address, price_feed: Address, token: Address) {
        storage::save_config(
            &env,
            &Config {
                owner,
                price_feed,
                token,
            },
        );
    }

    // ─── Funding ────────────────────────────────────────────────────

    /// Contribute `amount` native units.
    ///
    /// - `funder` must authorize the call and the token transfer.
    /// - Fails with `InsufficientAmount` unless `amount` is worth at least
    ///   `MINIMUM_USD` at the current oracle price.
    /// - Oracle failures surface as `PriceFeedUnavailable`, `InvalidPrice`
    ///   or `StalePrice`; nothing is recorded in that case.
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), Error> {
        funding::fund(&env, funder, amount)
    }

    /// Amount `funder` contributed since the last withdrawal.
    pub fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        storage::get_amount_funded(&env, &funder)
    }

    /// Funder at position `index` in contribution order. Repeat
    /// contributions appear once per call.
    pub fn get_funder(env: Env, index: u32) -> Result<Address, Error> {
        funding::get_funder(&env, index)
    }

    /// Number of entries in the funder sequence.
    pub fn get_funder_count(env: Env) -> u32 {
        storage::funder_count(&env)
    }

    // ─── Withdrawal ─────────────────────────────────────────────────

    /// Send the whole balance to the owner and reset every contribution.
    pub fn withdraw(env: Env, caller: Address) -> Result<(), Error> {
        withdraw::withdraw(&env, caller)
    }

    /// Same outcome as `withdraw`, with fewer storage reads.
    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<(), Error> {
        withdraw::cheaper_withdraw(&env, caller)
    }

    // ─── Price feed ─────────────────────────────────────────────────

    /// Reference-currency value of `amount` native units, with
    /// `REFERENCE_DECIMALS` decimals.
    pub fn get_conversion_rate(env: Env, amount: i128) -> Result<i128, Error> {
        let config = storage::load_config(&env);
        price_converter::get_conversion_rate(&env, &config, amount)
    }

    /// Interface version reported by the bound oracle.
    pub fn get_version(env: Env) -> Result<u32, Error> {
        let config = storage::load_config(&env);
        price_converter::get_version(&env, &config.price_feed)
    }

    /// Smallest accepted contribution in the reference currency.
    pub fn minimum_usd(_env: Env) -> i128 {
        MINIMUM_USD
    }

    // ─── Config ─────────────────────────────────────────────────────

    /// Address allowed to withdraw.
    pub fn get_owner(env: Env) -> Address {
        storage::load_config(&env).owner
    }

    /// Oracle contract bound at construction.
    pub fn get_price_feed(env: Env) -> Address {
        storage::load_config(&env).price_feed
    }

    /// Token contract of the native currency.
    pub fn get_token(env: Env) -> Address {
        storage::load_config(&env).token
    }
}
