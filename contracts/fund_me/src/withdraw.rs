// contracts/fund_me/src/withdraw.rs
//
// Owner-only sweep of the contract balance followed by a ledger reset.
//
// `withdraw` and `cheaper_withdraw` leave identical state behind. They differ
// only in how they walk the funder sequence:
//   - `withdraw` re-reads the sequence length from storage on every
//     iteration and bounds-checks every element read
//   - `cheaper_withdraw` reads the length once and reads slots directly

use soroban_sdk::{token, Address, Env};

use crate::{events, storage, types::Config, Error};

pub fn withdraw(env: &Env, caller: Address) -> Result<(), Error> {
    let config = only_owner(env, &caller)?;
    let amount = sweep_balance(env, &config)?;

    let mut index = 0;
    while index < storage::funder_count(env) {
        if let Some(funder) = storage::funder_at(env, index) {
            storage::reset_amount_funded(env, &funder);
        }
        index += 1;
    }

    let funder_count = storage::funder_count(env);
    storage::clear_funders(env);

    events::emit_withdrawn(env, config.owner, amount, funder_count);

    Ok(())
}

pub fn cheaper_withdraw(env: &Env, caller: Address) -> Result<(), Error> {
    let config = only_owner(env, &caller)?;
    let amount = sweep_balance(env, &config)?;

    let funder_count = storage::funder_count(env);
    for index in 0..funder_count {
        if let Some(funder) = storage::load_funder(env, index) {
            storage::reset_amount_funded(env, &funder);
        }
    }
    storage::clear_funders(env);

    events::emit_withdrawn(env, config.owner, amount, funder_count);

    Ok(())
}

/// Guard for privileged entry points. Returns the config so callers do not
/// load it twice.
fn only_owner(env: &Env, caller: &Address) -> Result<Config, Error> {
    caller.require_auth();

    let config = storage::load_config(env);
    if *caller != config.owner {
        return Err(Error::NotOwner);
    }
    Ok(config)
}

/// Transfer everything the contract holds to the owner. The ledger is only
/// reset by the callers once this has succeeded.
fn sweep_balance(env: &Env, config: &Config) -> Result<i128, Error> {
    let token_client = token::Client::new(env, &config.token);
    let contract = env.current_contract_address();
    let balance = token_client.balance(&contract);

    if balance > 0 {
        match token_client.try_transfer(&contract, &config.owner, &balance) {
            Ok(Ok(())) => {}
            _ => return Err(Error::TransferFailed),
        }
    }
    Ok(balance)
}
