// src/graph/order.rs
//! Total node orderings for the cycle: the pluggable policy behind the
//! topology builder.
//!
//! `identity` walks ids as-is. `interleaved` spreads the top-K nodes evenly
//! around the loop so the average cycle distance to a high-frequency node
//! stays low, then fills the gaps with the remaining ids in ascending order.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::graph::rank::NodeRanking;
use crate::graph::NodeId;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OrderingStrategy {
    /// Cycle over ids in their natural order 0..N-1.
    #[default]
    Identity,
    /// Top-K nodes placed at evenly spaced cycle positions.
    Interleaved,
}

impl OrderingStrategy {
    pub const ALL: [Self; 2] = [Self::Identity, Self::Interleaved];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Interleaved => "interleaved",
        }
    }
}

/// Produces the total ordering the cycle will follow.
#[must_use]
pub fn node_order(
    strategy: OrderingStrategy,
    ranking: &NodeRanking,
    node_count: usize,
) -> Vec<NodeId> {
    match strategy {
        OrderingStrategy::Identity => (0..node_count).collect(),
        OrderingStrategy::Interleaved => interleaved_order(ranking, node_count),
    }
}

fn interleaved_order(ranking: &NodeRanking, node_count: usize) -> Vec<NodeId> {
    let top = ranking.top_nodes();
    if top.is_empty() {
        return (0..node_count).collect();
    }

    let mut slots: Vec<Option<NodeId>> = vec![None; node_count];

    // Spread top-K nodes at evenly spaced positions, probing forward on
    // collision so every node lands exactly once.
    for (i, &node) in top.iter().enumerate() {
        let mut pos = i * node_count / top.len();
        while slots[pos % node_count].is_some() {
            pos += 1;
        }
        slots[pos % node_count] = Some(node);
    }

    // Remaining ids fill the free slots in ascending order. Deterministic by
    // construction; the ranker's tie-break already fixed the top-K order.
    let mut rest = (0..node_count).filter(|n| !ranking.is_top(*n));
    for slot in &mut slots {
        if slot.is_none() {
            *slot = rest.next();
        }
    }

    slots.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::rank::rank_nodes;
    use crate::graph::Query;

    fn ranking_with_top(node_count: usize, top: &[usize], k: usize) -> NodeRanking {
        let queries: Vec<Query> = top
            .iter()
            .enumerate()
            .flat_map(|(i, &t)| std::iter::repeat(Query::new(0, t)).take(top.len() + 1 - i))
            .collect();
        rank_nodes(&queries, node_count, k).unwrap()
    }

    fn assert_permutation(order: &[NodeId], node_count: usize) {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        let expected: Vec<NodeId> = (0..node_count).collect();
        assert_eq!(sorted, expected, "order must be a permutation of 0..N");
    }

    #[test]
    fn test_identity_order() {
        let ranking = ranking_with_top(5, &[2], 1);
        let order = node_order(OrderingStrategy::Identity, &ranking, 5);
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_interleaved_is_a_permutation() {
        let ranking = ranking_with_top(10, &[7, 2, 5], 3);
        let order = node_order(OrderingStrategy::Interleaved, &ranking, 10);
        assert_permutation(&order, 10);
    }

    #[test]
    fn test_interleaved_spreads_top_nodes() {
        let ranking = ranking_with_top(10, &[7, 2], 2);
        let order = node_order(OrderingStrategy::Interleaved, &ranking, 10);
        assert_permutation(&order, 10);

        // Top nodes at evenly spaced positions: 0 and N/2.
        let pos_7 = order.iter().position(|&n| n == 7).unwrap();
        let pos_2 = order.iter().position(|&n| n == 2).unwrap();
        assert_eq!(pos_7, 0);
        assert_eq!(pos_2, 5);
    }

    #[test]
    fn test_interleaved_deterministic() {
        let ranking = ranking_with_top(20, &[3, 11, 17, 5], 4);
        let a = node_order(OrderingStrategy::Interleaved, &ranking, 20);
        let b = node_order(OrderingStrategy::Interleaved, &ranking, 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_interleaved_without_top_nodes_falls_back_to_identity() {
        let ranking = rank_nodes(&[], 6, 0).unwrap();
        let order = node_order(OrderingStrategy::Interleaved, &ranking, 6);
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_all_top_nodes() {
        // K == N: every slot is a top node, still a valid permutation.
        let ranking = rank_nodes(&[], 4, 4).unwrap();
        let order = node_order(OrderingStrategy::Interleaved, &ranking, 4);
        assert_permutation(&order, 4);
    }
}
