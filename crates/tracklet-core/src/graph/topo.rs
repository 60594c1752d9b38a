/// Topological ordering with cycle detection, via Kahn's algorithm.
///
/// Kahn's algorithm computes an in-degree table for every node, seeds a BFS
/// queue with all zero-in-degree nodes, then repeatedly removes a node from
/// the queue and decrements the in-degrees of its successors. Any node whose
/// in-degree falls to zero is appended to the queue.
///
/// Cycle detection is a side effect of the ordering, not a separate pass: if
/// the queue drains before every node has been consumed, the leftover nodes
/// (those whose in-degree never reached zero) all participate in cycles.
use std::collections::VecDeque;

use crate::graph::TrackGraph;

// ---------------------------------------------------------------------------
// CycleError
// ---------------------------------------------------------------------------

/// Error returned when the graph contains at least one cycle.
///
/// No topological order exists for a cyclic graph, so the ordering fails
/// outright; no partial order is returned. `involved_nodes` lists the nodes
/// Kahn's algorithm could not consume, in index order — every one of them
/// lies on a cycle or is only reachable through one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError {
    /// Nodes left with positive in-degree when the queue drained.
    pub involved_nodes: Vec<u32>,
}

impl std::fmt::Display for CycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "graph contains a cycle involving {} node(s): {:?}",
            self.involved_nodes.len(),
            self.involved_nodes
        )
    }
}

impl std::error::Error for CycleError {}

// ---------------------------------------------------------------------------
// topological_order
// ---------------------------------------------------------------------------

/// Produces a topological order over all nodes of `graph`.
///
/// For every edge `u→v`, `u` precedes `v` in the returned sequence. The
/// order is deterministic for a given graph: the queue is seeded in node
/// index order and ties are broken by queue position, so repeated calls
/// return the same sequence.
///
/// # Errors
///
/// Returns [`CycleError`] when the graph contains a cycle. The error lists
/// every node that could not be scheduled.
pub fn topological_order(graph: &TrackGraph) -> Result<Vec<u32>, CycleError> {
    let node_count = graph.node_count();

    let mut in_degree: Vec<usize> = vec![0; node_count];
    for &(_, tgt) in graph.edges() {
        in_degree[tgt as usize] += 1;
    }

    let mut queue: VecDeque<u32> = (0..node_count as u32)
        .filter(|&u| in_degree[u as usize] == 0)
        .collect();

    let mut order: Vec<u32> = Vec::with_capacity(node_count);

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in graph.outgoing(u) {
            in_degree[v as usize] -= 1;
            if in_degree[v as usize] == 0 {
                queue.push_back(v);
            }
        }
    }

    if order.len() != node_count {
        let involved_nodes: Vec<u32> = (0..node_count as u32)
            .filter(|&u| in_degree[u as usize] > 0)
            .collect();
        return Err(CycleError { involved_nodes });
    }

    Ok(order)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
