// src/eval/mod.rs
//! Path evaluation: hop-bounded shortest paths over the built topology.
//!
//! Weights are ignored here. Once the topology is a cycle plus shortcuts, the
//! quantity being optimized is deterministic hop count, not a stochastic walk,
//! so plain BFS is the right oracle.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::VecDeque;

use crate::graph::{Graph, NodeId, Query};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// A path within the hop budget exists.
    Found { length: usize },
    /// No path within the hop budget.
    NotFound,
    /// Source or target outside `[0, N)`; excluded from aggregates.
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(flatten)]
    pub outcome: QueryOutcome,
}

/// Aggregate evaluation report handed to the output consumer.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    pub hop_budget: usize,
    /// Queries counted toward the success rate (found + not found).
    pub evaluated: usize,
    pub found: usize,
    /// Malformed queries excluded from the denominator.
    pub invalid: usize,
    /// Median hop count over found queries; absent when nothing was found.
    pub median_length: Option<f64>,
    /// found / evaluated; 0.0 when nothing was evaluated.
    pub success_rate: f64,
    pub results: Vec<QueryResult>,
}

/// Evaluates every query against the graph. Queries are independent and run
/// in parallel; result order matches input order.
#[must_use]
pub fn evaluate(graph: &Graph, queries: &[Query], hop_budget: usize) -> EvalReport {
    let results: Vec<QueryResult> = queries
        .par_iter()
        .map(|q| QueryResult {
            source: q.source,
            target: q.target,
            outcome: evaluate_one(graph, q, hop_budget),
        })
        .collect();

    aggregate(results, hop_budget)
}

fn evaluate_one(graph: &Graph, query: &Query, hop_budget: usize) -> QueryOutcome {
    let n = graph.node_count();
    if query.source >= n || query.target >= n {
        return QueryOutcome::Invalid;
    }
    if query.source == query.target {
        return QueryOutcome::Found { length: 0 };
    }

    match shortest_hops(graph, query.source, query.target, hop_budget) {
        Some(length) => QueryOutcome::Found { length },
        None => QueryOutcome::NotFound,
    }
}

/// BFS bounded by `max_hops` levels; weights play no role.
fn shortest_hops(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    max_hops: usize,
) -> Option<usize> {
    let mut dist = vec![usize::MAX; graph.node_count()];
    let mut queue = VecDeque::new();
    dist[source] = 0;
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        let next = dist[node] + 1;
        if next > max_hops {
            continue;
        }
        for edge in graph.outgoing(node) {
            if dist[edge.target] == usize::MAX {
                if edge.target == target {
                    return Some(next);
                }
                dist[edge.target] = next;
                queue.push_back(edge.target);
            }
        }
    }
    None
}

fn aggregate(results: Vec<QueryResult>, hop_budget: usize) -> EvalReport {
    let mut lengths: Vec<usize> = Vec::new();
    let mut invalid = 0;
    let mut not_found = 0;

    for r in &results {
        match r.outcome {
            QueryOutcome::Found { length } => lengths.push(length),
            QueryOutcome::NotFound => not_found += 1,
            QueryOutcome::Invalid => invalid += 1,
        }
    }

    let found = lengths.len();
    let evaluated = found + not_found;
    #[allow(clippy::cast_precision_loss)]
    let success_rate = if evaluated == 0 {
        0.0
    } else {
        found as f64 / evaluated as f64
    };

    EvalReport {
        hop_budget,
        evaluated,
        found,
        invalid,
        median_length: median(&mut lengths),
        success_rate,
        results,
    }
}

#[allow(clippy::cast_precision_loss)]
fn median(lengths: &mut [usize]) -> Option<f64> {
    if lengths.is_empty() {
        return None;
    }
    lengths.sort_unstable();
    let mid = lengths.len() / 2;
    if lengths.len() % 2 == 1 {
        Some(lengths[mid] as f64)
    } else {
        Some((lengths[mid - 1] + lengths[mid]) as f64 / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(&mut []), None);
        assert_eq!(median(&mut [3]), Some(3.0));
        assert_eq!(median(&mut [1, 2, 3]), Some(2.0));
        assert_eq!(median(&mut [1, 2, 3, 4]), Some(2.5));
        assert_eq!(median(&mut [4, 1, 3, 2]), Some(2.5));
    }
}
