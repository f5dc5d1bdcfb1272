// src/graph/weights.rs
//! Edge weights by class.
//!
//! Weights steer the random-walk consumer: a higher weight makes a walk more
//! likely to pick that edge over siblings. No normalization happens here;
//! turning weights into probabilities is the walk simulator's job.

use serde::{Deserialize, Serialize};

use crate::graph::{EdgeClass, Graph};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeWeights {
    pub cycle: f64,
    pub shortcut: f64,
}

impl Default for EdgeWeights {
    fn default() -> Self {
        Self {
            cycle: 0.1,
            shortcut: 1.0,
        }
    }
}

/// Maps every edge's class to its configured weight. Idempotent: the weight
/// depends only on the class tag, so a second pass is a no-op.
#[must_use]
pub fn assign(mut graph: Graph, weights: &EdgeWeights) -> Graph {
    for edge in graph.edges_mut() {
        edge.weight = match edge.class {
            EdgeClass::Cycle => weights.cycle,
            EdgeClass::Shortcut => weights.shortcut,
        };
    }
    graph
}
