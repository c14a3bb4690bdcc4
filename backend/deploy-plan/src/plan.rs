//! Turns a target network into an ordered list of contract deployments.
//!
//! Development networks get a `MockPriceFeed` deployed first and FundMe bound
//! to it; every other network binds FundMe to the live feed from the config
//! table. Nothing here talks to a network.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{MockFeedParams, NetworkConfig};
use crate::error::{PlanError, Result};

pub const MOCK_CONTRACT: &str = "MockPriceFeed";
pub const FUND_ME_CONTRACT: &str = "FundMe";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    All,
    Mocks,
    Fundme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceFeedSource {
    Mock(MockFeedParams),
    Live { address: String },
}

/// Constructor argument of a planned deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Arg {
    Address(String),
    /// Address of a contract deployed by an earlier step (or an earlier run).
    Deployed(String),
    /// The network's native asset contract.
    NativeAsset,
    U32(u32),
    I128(i128),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployStep {
    pub contract: String,
    pub tags: Vec<Tag>,
    pub args: Vec<Arg>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentPlan {
    pub network: String,
    pub chain_id: Option<u32>,
    pub price_feed: PriceFeedSource,
    pub confirmations: u32,
    /// Publish sources to a block explorer after deployment.
    pub verify: bool,
    pub steps: Vec<DeployStep>,
}

#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub network: String,
    pub chain_id: Option<u32>,
    /// Deploying account; becomes the FundMe owner.
    pub deployer: String,
    pub tags: Vec<Tag>,
    pub explorer_api_key: Option<String>,
}

/// Pick the price feed FundMe should be bound to on `network`.
pub fn resolve_price_feed(
    config: &NetworkConfig,
    network: &str,
    chain_id: Option<u32>,
) -> Result<PriceFeedSource> {
    if config.is_development(network) {
        info!(network, "local network detected, using mock price feed");
        return Ok(PriceFeedSource::Mock(config.mock));
    }

    let chain_id = chain_id.ok_or_else(|| PlanError::MissingChainId(network.to_string()))?;
    let entry = config
        .network(chain_id)
        .ok_or(PlanError::UnknownChain(chain_id))?;

    info!(network, chain_id, price_feed = %entry.price_feed, "using live price feed");
    Ok(PriceFeedSource::Live {
        address: entry.price_feed.clone(),
    })
}

fn selected(requested: &[Tag], step_tags: &[Tag]) -> bool {
    requested.iter().any(|t| step_tags.contains(t))
}

pub fn plan(config: &NetworkConfig, request: &PlanRequest) -> Result<DeploymentPlan> {
    let price_feed = resolve_price_feed(config, &request.network, request.chain_id)?;
    let development = matches!(price_feed, PriceFeedSource::Mock(_));

    let mut steps = Vec::new();

    if let PriceFeedSource::Mock(params) = &price_feed {
        let tags = vec![Tag::All, Tag::Mocks];
        if selected(&request.tags, &tags) {
            steps.push(DeployStep {
                contract: MOCK_CONTRACT.to_string(),
                tags,
                args: vec![Arg::U32(params.decimals), Arg::I128(params.initial_answer)],
            });
        }
    }

    let tags = vec![Tag::All, Tag::Fundme];
    if selected(&request.tags, &tags) {
        let feed_arg = match &price_feed {
            PriceFeedSource::Mock(_) => Arg::Deployed(MOCK_CONTRACT.to_string()),
            PriceFeedSource::Live { address } => Arg::Address(address.clone()),
        };
        steps.push(DeployStep {
            contract: FUND_ME_CONTRACT.to_string(),
            tags,
            args: vec![
                Arg::Address(request.deployer.clone()),
                feed_arg,
                Arg::NativeAsset,
            ],
        });
    }

    if steps.is_empty() {
        warn!(tags = ?request.tags, "no deployment step matches the requested tags");
    }

    let confirmations = request
        .chain_id
        .filter(|_| !development)
        .and_then(|id| config.network(id))
        .map(|entry| entry.block_confirmations)
        .unwrap_or(1);

    let verify = !development
        && request
            .explorer_api_key
            .as_deref()
            .is_some_and(|key| !key.is_empty());
    debug!(confirmations, verify, steps = steps.len(), "plan resolved");

    Ok(DeploymentPlan {
        network: request.network.clone(),
        chain_id: request.chain_id,
        price_feed,
        confirmations,
        verify,
        steps,
    })
}
