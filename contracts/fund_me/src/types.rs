// contracts/fund_me/src/types.rs
//
// The contract keeps two kinds of data:
//   - `Config`   written once by the constructor, never modified afterwards
//   - the ledger: `AmountFunded(funder)`, `Funder(index)` and `FunderCount`,
//     grown by `fund` and cleared by the withdraw entry points

use soroban_sdk::{contracttype, Address};

/// Immutable parameters fixed at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Only address allowed to withdraw.
    pub owner: Address,
    /// Oracle contract answering the `PriceFeed` interface.
    pub price_feed: Address,
    /// Token contract of the native currency contributors transfer.
    pub token: Address,
}

/// Storage keys for all contract data.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    /// Cumulative amount contributed by one funder since the last withdrawal.
    AmountFunded(Address),
    /// Slot `index` of the ordered funder list, one per successful `fund`.
    Funder(u32),
    /// Length of the funder list.
    FunderCount,
}
