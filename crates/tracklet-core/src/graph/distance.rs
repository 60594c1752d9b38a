/// Forward distance pass: longest weighted path ending at each node.
///
/// This is the standard DAG longest-path relaxation — a max-plus analogue of
/// Bellman–Ford restricted to a single sweep in topological order. Because
/// every node is finalised before any of its successors is visited, one pass
/// over the `V + E` graph elements reaches the global optimum; no fixpoint
/// iteration is needed.
use tracing::{debug, trace};

use crate::graph::TrackGraph;

/// Computes, for every node `v`, the maximum over all paths ending at `v` of
/// the sum of node weights along the path (inclusive of `v`).
///
/// `order` must be a topological order of `graph`, as produced by
/// [`crate::graph::topological_order`]. The result is a freshly allocated
/// array; the graph itself is not touched.
///
/// Every node starts at its own weight (a node with no predecessors is a
/// path of one node), so `distance[v] >= weight[v]` holds for the whole
/// result. Merges take the maximum over all incoming chains.
pub fn max_distances(graph: &TrackGraph, order: &[u32]) -> Vec<u64> {
    let mut distance: Vec<u64> = (0..graph.node_count() as u32)
        .map(|u| graph.weight(u))
        .collect();

    for &u in order {
        for &v in graph.outgoing(u) {
            let candidate = distance[u as usize] + graph.weight(v);
            if candidate > distance[v as usize] {
                trace!(
                    src = u,
                    tgt = v,
                    old = distance[v as usize],
                    new = candidate,
                    "relaxed forward distance"
                );
                distance[v as usize] = candidate;
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "forward distance pass complete"
    );

    distance
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
