//! Deployment planning for the FundMe contracts.
//!
//! Maps a network name / chain id to the price feed FundMe must be bound to
//! and to the ordered constructor calls that get there. The result is a
//! [`DeploymentPlan`] for whatever tool actually submits the transactions.

pub mod config;
pub mod error;
pub mod plan;

pub use config::{MockFeedParams, NetworkConfig, NetworkEntry};
pub use error::PlanError;
pub use plan::{
    plan, resolve_price_feed, Arg, DeployStep, DeploymentPlan, PlanRequest, PriceFeedSource, Tag,
};
