// src/config/io.rs
//! File loading for the config record and the query log.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{HopRouteError, Result};
use crate::graph::Query;

/// Reads and parses a TOML config file.
///
/// # Errors
/// `Io` with the offending path, or `Toml` on a parse failure.
pub fn load_toml_config(path: &Path) -> Result<Config> {
    let content = read(path)?;
    Ok(toml::from_str(&content)?)
}

/// Reads a query log: a JSON array of `[source, target]` pairs.
///
/// # Errors
/// `Io` with the offending path, or `Json` on a parse failure.
pub fn load_query_file(path: &Path) -> Result<Vec<Query>> {
    let content = read(path)?;
    let pairs: Vec<(usize, usize)> = serde_json::from_str(&content)?;
    Ok(pairs
        .into_iter()
        .map(|(source, target)| Query { source, target })
        .collect())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| HopRouteError::Io {
        source,
        path: path.to_path_buf(),
    })
}
