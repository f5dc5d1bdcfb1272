// src/config/mod.rs
//! Run configuration: the plain record the input provider hands us.

pub mod io;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{HopRouteError, Result};
use crate::graph::order::OrderingStrategy;
use crate::graph::weights::EdgeWeights;
use crate::graph::Query;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Total node count `N`; ids are `[0, N)`.
    pub node_count: usize,
    /// Maximum total edge count (`E_max`).
    pub edge_budget: usize,
    #[serde(default = "default_max_degree")]
    pub max_degree: usize,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_cycle_weight")]
    pub cycle_weight: f64,
    #[serde(default = "default_shortcut_weight")]
    pub shortcut_weight: f64,
    #[serde(default = "default_hop_budget")]
    pub hop_budget: usize,
    #[serde(default)]
    pub ordering: OrderingStrategy,
    /// JSON file holding the query log as `[source, target]` pairs.
    #[serde(default = "default_queries_file")]
    pub queries_file: PathBuf,
}

fn default_max_degree() -> usize { 2 }
fn default_top_k() -> usize { 100 }
fn default_cycle_weight() -> f64 { 0.1 }
fn default_shortcut_weight() -> f64 { 1.0 }
fn default_hop_budget() -> usize { 1000 }
fn default_queries_file() -> PathBuf { PathBuf::from("queries.json") }

impl Config {
    /// Loads and validates a TOML config file.
    ///
    /// # Errors
    /// `Io`/`Toml` on read or parse failure, `InvalidInput` on a malformed
    /// record.
    pub fn load(path: &Path) -> Result<Self> {
        let config = io::load_toml_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Front-loads the `InvalidInput` checks so the builder and evaluator
    /// only ever see well-formed parameters.
    ///
    /// # Errors
    /// `InvalidInput` naming the failing field.
    pub fn validate(&self) -> Result<()> {
        if self.node_count == 0 {
            return Err(HopRouteError::InvalidInput(
                "node_count must be positive".to_string(),
            ));
        }
        if self.cycle_weight <= 0.0 {
            return Err(HopRouteError::InvalidInput(format!(
                "cycle_weight must be positive (got {})",
                self.cycle_weight
            )));
        }
        if self.shortcut_weight <= 0.0 {
            return Err(HopRouteError::InvalidInput(format!(
                "shortcut_weight must be positive (got {})",
                self.shortcut_weight
            )));
        }
        Ok(())
    }

    /// Loads the query log referenced by `queries_file`, resolved relative
    /// to `base` when the path itself is relative.
    ///
    /// # Errors
    /// `Io`/`Json` on read or parse failure.
    pub fn load_queries(&self, base: &Path) -> Result<Vec<Query>> {
        let path = if self.queries_file.is_absolute() {
            self.queries_file.clone()
        } else {
            base.join(&self.queries_file)
        };
        io::load_query_file(&path)
    }

    #[must_use]
    pub fn weights(&self) -> EdgeWeights {
        EdgeWeights {
            cycle: self.cycle_weight,
            shortcut: self.shortcut_weight,
        }
    }

    #[must_use]
    pub fn budgets(&self) -> crate::graph::builder::Budgets {
        crate::graph::builder::Budgets {
            edge_budget: self.edge_budget,
            max_degree: self.max_degree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Config {
        toml::from_str("node_count = 10\nedge_budget = 15").unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = minimal();
        assert_eq!(config.max_degree, 2);
        assert_eq!(config.top_k, 100);
        assert_eq!(config.cycle_weight, 0.1);
        assert_eq!(config.shortcut_weight, 1.0);
        assert_eq!(config.ordering, OrderingStrategy::Identity);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_node_count_rejected() {
        let mut config = minimal();
        config.node_count = 0;
        assert!(matches!(
            config.validate(),
            Err(HopRouteError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_nonpositive_weight_rejected() {
        let mut config = minimal();
        config.cycle_weight = 0.0;
        assert!(config.validate().is_err());

        let mut config = minimal();
        config.shortcut_weight = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ordering_from_toml() {
        let config: Config =
            toml::from_str("node_count = 5\nedge_budget = 5\nordering = \"interleaved\"")
                .unwrap();
        assert_eq!(config.ordering, OrderingStrategy::Interleaved);
    }
}
