// src/explore.rs
//! Parallel exploration of candidate node orderings.
//!
//! Candidates are independent: each owns its graph, so they run in parallel
//! with no shared mutable state and reduce by a simple score comparison.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::eval;
use crate::graph::builder;
use crate::graph::order::OrderingStrategy;
use crate::graph::rank::{self, NodeRanking};
use crate::graph::weights;
use crate::graph::Query;

/// Summary of one candidate ordering's evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub strategy: OrderingStrategy,
    pub edge_count: usize,
    pub evaluated: usize,
    pub found: usize,
    pub invalid: usize,
    pub median_length: Option<f64>,
    pub success_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExploreReport {
    pub candidates: Vec<Candidate>,
    pub best: OrderingStrategy,
}

/// Builds and evaluates every ordering strategy, picking the best by
/// success rate, then median length, then strategy declaration order.
///
/// # Errors
/// Propagates ranking or construction failures from any candidate.
pub fn run(config: &Config, queries: &[Query]) -> Result<ExploreReport> {
    let ranking = rank::rank_nodes(queries, config.node_count, config.top_k)?;

    let candidates: Vec<Candidate> = OrderingStrategy::ALL
        .par_iter()
        .map(|&strategy| evaluate_candidate(config, queries, &ranking, strategy))
        .collect::<Result<_>>()?;

    let best = pick_best(&candidates);
    Ok(ExploreReport { candidates, best })
}

fn evaluate_candidate(
    config: &Config,
    queries: &[Query],
    ranking: &NodeRanking,
    strategy: OrderingStrategy,
) -> Result<Candidate> {
    let graph = builder::build(config.node_count, config.budgets(), ranking, strategy)?;
    let graph = weights::assign(graph, &config.weights());
    let report = eval::evaluate(&graph, queries, config.hop_budget);

    Ok(Candidate {
        strategy,
        edge_count: graph.edge_count(),
        evaluated: report.evaluated,
        found: report.found,
        invalid: report.invalid,
        median_length: report.median_length,
        success_rate: report.success_rate,
    })
}

fn pick_best(candidates: &[Candidate]) -> OrderingStrategy {
    let mut best = 0;
    for i in 1..candidates.len() {
        if beats(&candidates[i], &candidates[best]) {
            best = i;
        }
    }
    candidates.get(best).map_or_else(OrderingStrategy::default, |c| c.strategy)
}

/// Strict improvement only, so earlier strategies win ties deterministically.
fn beats(a: &Candidate, b: &Candidate) -> bool {
    if a.success_rate != b.success_rate {
        return a.success_rate > b.success_rate;
    }
    let ma = a.median_length.unwrap_or(f64::INFINITY);
    let mb = b.median_length.unwrap_or(f64::INFINITY);
    ma < mb
}
