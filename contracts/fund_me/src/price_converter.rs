// contracts/fund_me/src/price_converter.rs
//
// Native amount → reference (USD) value, through whatever oracle contract
// was bound at construction. The oracle only has to answer the `PriceFeed`
// interface; on development networks that is the mock feed, elsewhere a
// live aggregator.

use soroban_sdk::{contractclient, contracttype, token, Address, Env};

use crate::{types::Config, Error};

/// Decimals of every value returned by `get_conversion_rate`.
pub const REFERENCE_DECIMALS: u32 = 18;

/// Oldest round (in seconds, against the ledger timestamp) still accepted.
pub const PRICE_MAX_AGE: u64 = 3_600;

/// Round as reported by an aggregator-style oracle.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn decimals(env: Env) -> u32;
    fn latest_round_data(env: Env) -> RoundData;
    fn version(env: Env) -> u32;
}

/// Latest accepted price and its decimals.
pub fn get_price(env: &Env, price_feed: &Address) -> Result<(i128, u32), Error> {
    let feed = PriceFeedClient::new(env, price_feed);

    let round = match feed.try_latest_round_data() {
        Ok(Ok(round)) => round,
        _ => return Err(Error::PriceFeedUnavailable),
    };
    if round.answer <= 0 {
        return Err(Error::InvalidPrice);
    }
    if env.ledger().timestamp().saturating_sub(round.updated_at) > PRICE_MAX_AGE {
        return Err(Error::StalePrice);
    }

    let decimals = match feed.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => return Err(Error::PriceFeedUnavailable),
    };
    Ok((round.answer, decimals))
}

pub fn get_version(env: &Env, price_feed: &Address) -> Result<u32, Error> {
    match PriceFeedClient::new(env, price_feed).try_version() {
        Ok(Ok(version)) => Ok(version),
        _ => Err(Error::PriceFeedUnavailable),
    }
}

/// Value of `amount` native units in the reference currency, with
/// `REFERENCE_DECIMALS` decimals.
pub fn get_conversion_rate(env: &Env, config: &Config, amount: i128) -> Result<i128, Error> {
    let (price, feed_decimals) = get_price(env, &config.price_feed)?;
    let token_decimals = token::Client::new(env, &config.token).decimals();

    let raw = amount
        .checked_mul(price)
        .ok_or(Error::ArithmeticOverflow)?;
    let decimals = token_decimals
        .checked_add(feed_decimals)
        .ok_or(Error::ArithmeticOverflow)?;
    rescale(raw, decimals, REFERENCE_DECIMALS)
}

/// Move `value` from `from` decimals to `to` decimals. Scaling down truncates.
fn rescale(value: i128, from: u32, to: u32) -> Result<i128, Error> {
    if from <= to {
        let factor = 10i128
            .checked_pow(to - from)
            .ok_or(Error::ArithmeticOverflow)?;
        value.checked_mul(factor).ok_or(Error::ArithmeticOverflow)
    } else {
        let factor = 10i128
            .checked_pow(from - to)
            .ok_or(Error::ArithmeticOverflow)?;
        Ok(value / factor)
    }
}
