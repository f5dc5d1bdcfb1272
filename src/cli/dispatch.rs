//! Command dispatch logic extracted from the binary.

use anyhow::Result;

use super::args::Commands;
use super::handlers;
use crate::exit::HopRouteExit;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<HopRouteExit> {
    match command {
        Commands::Build {
            config,
            ordering,
            verify,
            json,
        } => handlers::handle_build(&config, ordering, verify, json),
        Commands::Eval {
            config,
            ordering,
            hop_budget,
            json,
        } => handlers::handle_eval(&config, ordering, hop_budget, json),
        Commands::Explore { config, json } => handlers::handle_explore(&config, json),
    }
}
