use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fundme_deploy_plan::{plan, NetworkConfig, PlanRequest, Tag};

/// Print the FundMe deployment plan for a network as JSON.
#[derive(Debug, Parser)]
#[command(name = "fundme-deploy-plan", version)]
struct Cli {
    /// Target network name. Falls back to FUNDME_NETWORK.
    #[arg(long)]
    network: Option<String>,

    /// Chain id of the target network. Falls back to FUNDME_CHAIN_ID.
    #[arg(long)]
    chain_id: Option<u32>,

    /// JSON network table; the built-in table is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Deployment tags to include.
    #[arg(long, value_enum, value_delimiter = ',', default_value = "all")]
    tags: Vec<Tag>,

    /// Deploying account, becomes the FundMe owner.
    #[arg(long)]
    deployer: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let network = match cli.network {
        Some(network) => network,
        None => std::env::var("FUNDME_NETWORK")
            .context("no --network given and FUNDME_NETWORK is not set")?,
    };

    let chain_id = match cli.chain_id {
        Some(id) => Some(id),
        None => match std::env::var("FUNDME_CHAIN_ID") {
            Ok(raw) => Some(
                raw.parse()
                    .with_context(|| format!("FUNDME_CHAIN_ID is not a chain id: {raw}"))?,
            ),
            Err(_) => None,
        },
    };

    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading network config");
            NetworkConfig::load(path)?
        }
        None => NetworkConfig::default(),
    };

    let request = PlanRequest {
        network,
        chain_id,
        deployer: cli.deployer,
        tags: cli.tags,
        explorer_api_key: std::env::var("EXPLORER_API_KEY").ok(),
    };

    let plan = plan(&config, &request)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
