// src/graph/builder.rs
//! Topology construction: one directed cycle over all nodes, plus shortcut
//! edges toward nearby top-K nodes while the edge budget lasts.
//!
//! The cycle alone makes the graph strongly connected with exactly N edges;
//! shortcuts only ever add to that, so connectivity holds for every output.

use crate::error::{HopRouteError, Result};
use crate::graph::order::{node_order, OrderingStrategy};
use crate::graph::rank::NodeRanking;
use crate::graph::{Edge, EdgeClass, Graph, NodeId};

/// Construction limits handed in by the caller.
#[derive(Debug, Clone, Copy)]
pub struct Budgets {
    /// Maximum total edge count (`E_max`).
    pub edge_budget: usize,
    /// Maximum out-degree per node (`D_max`).
    pub max_degree: usize,
}

/// Builds the routing topology.
///
/// Edges carry their class tag and a placeholder weight of 1.0; the weight
/// assigner maps classes to configured weights afterwards.
///
/// # Errors
/// `BudgetExceeded` if the budgets cannot support a strongly connected
/// spanning cycle (`edge_budget < N` or `max_degree < 1`).
pub fn build(
    node_count: usize,
    budgets: Budgets,
    ranking: &NodeRanking,
    strategy: OrderingStrategy,
) -> Result<Graph> {
    check_budgets(node_count, budgets)?;

    let order = node_order(strategy, ranking, node_count);
    let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); node_count];

    add_cycle_edges(&order, &mut adjacency);

    let remaining = budgets.edge_budget - node_count;
    if remaining > 0 {
        add_shortcut_edges(&order, ranking, budgets.max_degree, remaining, &mut adjacency);
    }

    Ok(Graph::new(adjacency))
}

fn check_budgets(node_count: usize, budgets: Budgets) -> Result<()> {
    if budgets.edge_budget < node_count {
        return Err(HopRouteError::BudgetExceeded(format!(
            "a spanning cycle over {node_count} nodes needs {node_count} edges, budget is {}",
            budgets.edge_budget
        )));
    }
    if budgets.max_degree < 1 {
        return Err(HopRouteError::BudgetExceeded(
            "max_degree must be at least 1 to carry the cycle edge".to_string(),
        ));
    }
    Ok(())
}

fn add_cycle_edges(order: &[NodeId], adjacency: &mut [Vec<Edge>]) {
    let n = order.len();
    for i in 0..n {
        let source = order[i];
        let successor = order[(i + 1) % n];
        push_edge(adjacency, source, successor, EdgeClass::Cycle);
    }
}

/// One shortcut per node to the nearest top-K node after its cycle successor,
/// skipped when the successor is already top-K, the budget is spent, or the
/// node is out of degree headroom.
fn add_shortcut_edges(
    order: &[NodeId],
    ranking: &NodeRanking,
    max_degree: usize,
    mut remaining: usize,
    adjacency: &mut [Vec<Edge>],
) {
    let n = order.len();
    if ranking.top_k() == 0 {
        return;
    }

    for i in 0..n {
        if remaining == 0 {
            return;
        }
        let source = order[i];
        let successor = order[(i + 1) % n];
        if ranking.is_top(successor) {
            continue;
        }
        if adjacency[source].len() >= max_degree {
            continue;
        }

        // j = 1 is the cycle successor, already known not to be top-K.
        // j stays below n, so the candidate can never be the source itself.
        let shortcut = (2..n)
            .map(|j| order[(i + j) % n])
            .find(|&cand| ranking.is_top(cand));

        if let Some(target) = shortcut {
            if push_edge(adjacency, source, target, EdgeClass::Shortcut) {
                remaining -= 1;
            }
        }
    }
}

/// Adds an edge, deduplicating by ordered pair: an existing edge to the same
/// target is upgraded to `Shortcut` (the higher-weight class) rather than
/// duplicated. Returns whether a new edge was stored.
fn push_edge(
    adjacency: &mut [Vec<Edge>],
    source: NodeId,
    target: NodeId,
    class: EdgeClass,
) -> bool {
    if let Some(existing) = adjacency[source].iter_mut().find(|e| e.target == target) {
        if class == EdgeClass::Shortcut {
            existing.class = EdgeClass::Shortcut;
        }
        return false;
    }
    adjacency[source].push(Edge {
        target,
        weight: 1.0,
        class,
    });
    true
}
