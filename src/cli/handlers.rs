//! Handlers for the build, eval, and explore commands.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::eval;
use crate::exit::HopRouteExit;
use crate::explore;
use crate::graph::builder;
use crate::graph::order::OrderingStrategy;
use crate::graph::rank;
use crate::graph::weights;
use crate::graph::{Graph, Query};
use crate::report::{self, BuildReport};

/// Loads the config and its query log, rooted at the config file's directory.
fn load_inputs(config_path: &Path) -> Result<(Config, Vec<Query>)> {
    let config = Config::load(config_path)?;
    let base = config_path.parent().unwrap_or_else(|| Path::new("."));
    let queries = config.load_queries(base)?;
    Ok((config, queries))
}

/// Runs the full construction pipeline: rank, build, weight.
fn build_graph(
    config: &Config,
    queries: &[Query],
    strategy: OrderingStrategy,
) -> Result<Graph> {
    let ranking = rank::rank_nodes(queries, config.node_count, config.top_k)?;
    let graph = builder::build(config.node_count, config.budgets(), &ranking, strategy)?;
    Ok(weights::assign(graph, &config.weights()))
}

/// # Errors
/// Returns error on config, query-log, or construction failure.
pub fn handle_build(
    config_path: &Path,
    ordering: Option<OrderingStrategy>,
    verify: bool,
    json: bool,
) -> Result<HopRouteExit> {
    let (config, queries) = load_inputs(config_path)?;
    let strategy = ordering.unwrap_or(config.ordering);
    let graph = build_graph(&config, &queries, strategy)?;

    let mut build_report = BuildReport::from_graph(&graph);
    let mut verified_ok = true;
    if verify {
        verified_ok = graph.is_strongly_connected()
            && graph.edge_count() <= config.edge_budget
            && graph.max_out_degree() <= config.max_degree;
        build_report = build_report.with_verification(verified_ok);
    }

    if json {
        println!("{}", report::to_json(&build_report)?);
    } else {
        report::print_build(&build_report);
    }

    if verified_ok {
        Ok(HopRouteExit::Success)
    } else {
        Ok(HopRouteExit::VerifyFailed)
    }
}

/// # Errors
/// Returns error on config, query-log, or construction failure.
pub fn handle_eval(
    config_path: &Path,
    ordering: Option<OrderingStrategy>,
    hop_budget: Option<usize>,
    json: bool,
) -> Result<HopRouteExit> {
    let (config, queries) = load_inputs(config_path)?;
    let strategy = ordering.unwrap_or(config.ordering);
    let graph = build_graph(&config, &queries, strategy)?;

    let budget = hop_budget.unwrap_or(config.hop_budget);
    let eval_report = eval::evaluate(&graph, &queries, budget);

    if json {
        println!("{}", report::to_json(&eval_report)?);
    } else {
        report::print_eval(&eval_report);
    }

    Ok(HopRouteExit::Success)
}

/// # Errors
/// Returns error on config, query-log, or construction failure.
pub fn handle_explore(config_path: &Path, json: bool) -> Result<HopRouteExit> {
    let (config, queries) = load_inputs(config_path)?;
    let explore_report = explore::run(&config, &queries)?;

    if json {
        println!("{}", report::to_json(&explore_report)?);
    } else {
        report::print_explore(&explore_report);
    }

    Ok(HopRouteExit::Success)
}
