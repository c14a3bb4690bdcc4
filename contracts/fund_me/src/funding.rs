use soroban_sdk::{token, Address, Env};

use crate::{events, price_converter, storage, Error, MINIMUM_USD};

pub fn fund(env: &Env, funder: Address, amount: i128) -> Result<(), Error> {
    funder.require_auth();

    if amount <= 0 {
        return Err(Error::InsufficientAmount);
    }

    let config = storage::load_config(env);
    if price_converter::get_conversion_rate(env, &config, amount)? < MINIMUM_USD {
        return Err(Error::InsufficientAmount);
    }

    let total_funded = storage::get_amount_funded(env, &funder)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    // Pull the contribution into the contract before touching the ledger.
    let token_client = token::Client::new(env, &config.token);
    match token_client.try_transfer(&funder, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => {}
        _ => return Err(Error::TransferFailed),
    }

    storage::set_amount_funded(env, &funder, total_funded);
    storage::push_funder(env, &funder);

    events::emit_funded(env, funder, amount, total_funded);

    Ok(())
}

pub fn get_funder(env: &Env, index: u32) -> Result<Address, Error> {
    storage::funder_at(env, index).ok_or(Error::IndexOutOfRange)
}
