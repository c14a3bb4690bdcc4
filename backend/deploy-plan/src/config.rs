//! Network configuration: which live price feed each chain uses, which
//! networks are local development networks, and how the mock feed is seeded.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Decimals the mock feed reports.
pub const DECIMALS: u32 = 8;
/// First answer of the mock feed: 2000 with `DECIMALS` decimals.
pub const INITIAL_ANSWER: i128 = 200_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEntry {
    pub name: String,
    /// Address of the live ETH/USD aggregator on this chain.
    pub price_feed: String,
    #[serde(default = "default_confirmations")]
    pub block_confirmations: u32,
}

fn default_confirmations() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockFeedParams {
    pub decimals: u32,
    pub initial_answer: i128,
}

impl Default for MockFeedParams {
    fn default() -> Self {
        Self {
            decimals: DECIMALS,
            initial_answer: INITIAL_ANSWER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Live networks keyed by chain id.
    #[serde(default)]
    pub networks: BTreeMap<u32, NetworkEntry>,
    /// Network names that get a mock feed instead of a live one.
    #[serde(default = "default_development_networks")]
    pub development_networks: Vec<String>,
    #[serde(default)]
    pub mock: MockFeedParams,
}

fn default_development_networks() -> Vec<String> {
    vec!["hardhat".to_string(), "localhost".to_string()]
}

impl Default for NetworkConfig {
    fn default() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            4,
            NetworkEntry {
                name: "rinkeby".to_string(),
                price_feed: "0x8A753747A1Fa494EC906cE90E9f37563A8AF630e".to_string(),
                block_confirmations: 1,
            },
        );
        networks.insert(
            137,
            NetworkEntry {
                name: "polygon".to_string(),
                price_feed: "0xF9680D99D6C9589e2a93a78A04A279e509205945".to_string(),
                block_confirmations: 1,
            },
        );
        Self {
            networks,
            development_networks: default_development_networks(),
            mock: MockFeedParams::default(),
        }
    }
}

impl NetworkConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn is_development(&self, network: &str) -> bool {
        self.development_networks.iter().any(|n| n == network)
    }

    pub fn network(&self, chain_id: u32) -> Option<&NetworkEntry> {
        self.networks.get(&chain_id)
    }
}
