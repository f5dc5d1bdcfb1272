use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::graph::order::OrderingStrategy;

#[derive(Parser)]
#[command(
    name = "hoproute",
    version,
    about = "Cycle-and-shortcut topology optimizer for hop-bounded query routing"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the topology and print the weighted edge list
    Build {
        /// Config file (TOML)
        #[arg(long, short, value_name = "FILE", default_value = "hoproute.toml")]
        config: PathBuf,
        /// Override the configured ordering strategy
        #[arg(long, value_enum)]
        ordering: Option<OrderingStrategy>,
        /// Re-check connectivity and budgets on the built graph
        #[arg(long)]
        verify: bool,
        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
    /// Build the topology, then evaluate the query log against it
    Eval {
        /// Config file (TOML)
        #[arg(long, short, value_name = "FILE", default_value = "hoproute.toml")]
        config: PathBuf,
        /// Override the configured ordering strategy
        #[arg(long, value_enum)]
        ordering: Option<OrderingStrategy>,
        /// Override the configured hop budget
        #[arg(long, value_name = "HOPS")]
        hop_budget: Option<usize>,
        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
    /// Evaluate every ordering strategy in parallel and report the best
    Explore {
        /// Config file (TOML)
        #[arg(long, short, value_name = "FILE", default_value = "hoproute.toml")]
        config: PathBuf,
        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
}
