// src/graph/mod.rs
//! The routing topology: nodes, classed edges, and the immutable graph.

pub mod builder;
pub mod order;
pub mod rank;
pub mod weights;

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub type NodeId = usize;

/// A query from the workload: route from `source` to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub source: NodeId,
    pub target: NodeId,
}

impl Query {
    #[must_use]
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeClass {
    /// Connects a node to its successor in the chosen total ordering.
    Cycle,
    /// Auxiliary edge toward a nearby high-frequency node.
    Shortcut,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f64,
    pub class: EdgeClass,
}

/// One row of the exported edge list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
    pub class: EdgeClass,
}

/// A directed graph over the fixed node set `[0, N)`.
///
/// Built once by the topology builder, then read-only. The evaluator
/// never mutates it.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    pub(crate) fn new(adjacency: Vec<Vec<Edge>>) -> Self {
        Self { adjacency }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing edges of `node`. Empty slice for out-of-range ids.
    #[must_use]
    pub fn outgoing(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.outgoing(node).len()
    }

    #[must_use]
    pub fn max_out_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn count_class(&self, class: EdgeClass) -> usize {
        self.adjacency
            .iter()
            .flatten()
            .filter(|e| e.class == class)
            .count()
    }

    /// Flattened edge list in ascending source order, the export format
    /// handed to the output consumer.
    #[must_use]
    pub fn edge_list(&self) -> Vec<EdgeRecord> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, edges)| {
                edges.iter().map(move |e| EdgeRecord {
                    source,
                    target: e.target,
                    weight: e.weight,
                    class: e.class,
                })
            })
            .collect()
    }

    /// True when every node reaches every other node via directed edges.
    ///
    /// Reachability closure from every node; fine for the intended scale
    /// (hundreds to low thousands of nodes).
    #[must_use]
    pub fn is_strongly_connected(&self) -> bool {
        let n = self.node_count();
        if n == 0 {
            return false;
        }
        (0..n).all(|start| self.reachable_count(start) == n)
    }

    fn reachable_count(&self, start: NodeId) -> usize {
        let mut seen = vec![false; self.node_count()];
        let mut queue = VecDeque::new();
        seen[start] = true;
        queue.push_back(start);
        let mut count = 1;

        while let Some(node) = queue.pop_front() {
            for edge in self.outgoing(node) {
                if !seen[edge.target] {
                    seen[edge.target] = true;
                    count += 1;
                    queue.push_back(edge.target);
                }
            }
        }
        count
    }

    pub(crate) fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
        self.adjacency.iter_mut().flatten()
    }
}
