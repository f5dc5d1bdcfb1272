// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HopRouteError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Budget exceeded: {0}")]
    BudgetExceeded(String),

    #[error("Invalid query #{index}: ({src}, {target}) references a node outside [0, {node_count})")]
    InvalidQuery {
        index: usize,
        src: usize,
        target: usize,
        node_count: usize,
    },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Query file parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HopRouteError>;

// Allow `?` on std::io::Error by converting to HopRouteError::Io with unknown path.
impl From<std::io::Error> for HopRouteError {
    fn from(source: std::io::Error) -> Self {
        HopRouteError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
