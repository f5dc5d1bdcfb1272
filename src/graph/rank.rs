// src/graph/rank.rs
//! Node ranking by query frequency.
//!
//! Pure function of the query log: counts how often each node appears as a
//! query target, orders nodes by descending frequency (ties by ascending id),
//! and exposes the top-K set used for shortcut placement.

use std::collections::HashSet;

use crate::error::{HopRouteError, Result};
use crate::graph::{NodeId, Query};

/// Frequency ranking over the fixed node set.
#[derive(Debug, Clone)]
pub struct NodeRanking {
    counts: Vec<usize>,
    /// Node ids, most frequent first.
    by_rank: Vec<NodeId>,
    /// Inverse of `by_rank`: rank 0 = most frequent.
    rank_of: Vec<usize>,
    top: HashSet<NodeId>,
    top_k: usize,
}

impl NodeRanking {
    #[must_use]
    pub fn frequency(&self, node: NodeId) -> usize {
        self.counts.get(node).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn rank(&self, node: NodeId) -> usize {
        self.rank_of.get(node).copied().unwrap_or(usize::MAX)
    }

    /// Node ids ordered by rank, most frequent first.
    #[must_use]
    pub fn by_rank(&self) -> &[NodeId] {
        &self.by_rank
    }

    /// The K highest-ranked node ids, in rank order.
    #[must_use]
    pub fn top_nodes(&self) -> &[NodeId] {
        &self.by_rank[..self.top_k]
    }

    #[must_use]
    pub fn is_top(&self, node: NodeId) -> bool {
        self.top.contains(&node)
    }

    #[must_use]
    pub fn top_k(&self) -> usize {
        self.top_k
    }
}

/// Ranks all nodes in `[0, node_count)` by query-target frequency.
///
/// `top_k` is clamped to `node_count`.
///
/// # Errors
/// `InvalidInput` if `node_count` is zero or any query references a node
/// outside `[0, node_count)`.
pub fn rank_nodes(queries: &[Query], node_count: usize, top_k: usize) -> Result<NodeRanking> {
    if node_count == 0 {
        return Err(HopRouteError::InvalidInput(
            "node_count must be positive".to_string(),
        ));
    }

    let counts = count_frequencies(queries, node_count)?;
    let by_rank = order_by_frequency(&counts);

    let mut rank_of = vec![0; node_count];
    for (rank, &node) in by_rank.iter().enumerate() {
        rank_of[node] = rank;
    }

    let top_k = top_k.min(node_count);
    let top = by_rank[..top_k].iter().copied().collect();

    Ok(NodeRanking {
        counts,
        by_rank,
        rank_of,
        top,
        top_k,
    })
}

fn count_frequencies(queries: &[Query], node_count: usize) -> Result<Vec<usize>> {
    let mut counts = vec![0usize; node_count];

    for (index, q) in queries.iter().enumerate() {
        if q.source >= node_count || q.target >= node_count {
            return Err(HopRouteError::InvalidInput(format!(
                "query #{index} ({}, {}) references a node outside [0, {node_count})",
                q.source, q.target
            )));
        }
        counts[q.target] += 1;
    }

    Ok(counts)
}

fn order_by_frequency(counts: &[usize]) -> Vec<NodeId> {
    let mut ids: Vec<NodeId> = (0..counts.len()).collect();
    // Descending frequency, ties broken by ascending id.
    ids.sort_by(|&a, &b| counts[b].cmp(&counts[a]).then(a.cmp(&b)));
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queries(pairs: &[(usize, usize)]) -> Vec<Query> {
        pairs.iter().map(|&(s, t)| Query::new(s, t)).collect()
    }

    #[test]
    fn test_rank_by_target_frequency() {
        let log = queries(&[(0, 3), (1, 3), (2, 3), (0, 1), (2, 1), (0, 4)]);
        let ranking = rank_nodes(&log, 5, 2).unwrap();

        assert_eq!(ranking.frequency(3), 3);
        assert_eq!(ranking.frequency(1), 2);
        assert_eq!(ranking.frequency(4), 1);
        assert_eq!(ranking.rank(3), 0);
        assert_eq!(ranking.rank(1), 1);
        assert_eq!(ranking.top_nodes(), &[3, 1]);
        assert!(ranking.is_top(3));
        assert!(!ranking.is_top(4));
    }

    #[test]
    fn test_ties_broken_by_ascending_id() {
        // Nodes 7 and 3 both hit 5 times: 3 must rank before 7.
        let mut pairs = Vec::new();
        for _ in 0..5 {
            pairs.push((0, 7));
            pairs.push((0, 3));
        }
        let ranking = rank_nodes(&queries(&pairs), 8, 2).unwrap();
        assert_eq!(ranking.top_nodes(), &[3, 7]);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let log = queries(&[(0, 2), (1, 2), (3, 4), (4, 0), (2, 0)]);
        let a = rank_nodes(&log, 5, 3).unwrap();
        let b = rank_nodes(&log, 5, 3).unwrap();
        assert_eq!(a.by_rank(), b.by_rank());
        assert_eq!(a.top_nodes(), b.top_nodes());
    }

    #[test]
    fn test_empty_log_ranks_by_id() {
        let ranking = rank_nodes(&[], 4, 2).unwrap();
        assert_eq!(ranking.by_rank(), &[0, 1, 2, 3]);
        assert_eq!(ranking.top_nodes(), &[0, 1]);
    }

    #[test]
    fn test_top_k_clamped_to_node_count() {
        let ranking = rank_nodes(&[], 3, 100).unwrap();
        assert_eq!(ranking.top_k(), 3);
        assert_eq!(ranking.top_nodes().len(), 3);
    }

    #[test]
    fn test_zero_node_count_rejected() {
        let err = rank_nodes(&[], 0, 1).unwrap_err();
        assert!(matches!(err, HopRouteError::InvalidInput(_)));
    }

    #[test]
    fn test_out_of_range_query_rejected() {
        let err = rank_nodes(&queries(&[(0, 5)]), 5, 1).unwrap_err();
        assert!(matches!(err, HopRouteError::InvalidInput(_)));
    }
}
