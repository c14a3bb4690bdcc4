use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read network config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid network config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("network `{0}` is not a development network and no chain id was given")]
    MissingChainId(String),

    #[error("no price feed configured for chain id {0}")]
    UnknownChain(u32),
}

pub type Result<T> = std::result::Result<T, PlanError>;
