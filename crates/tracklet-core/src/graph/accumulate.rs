/// Backward accumulation pass: longest weighted path through each node.
///
/// The forward pass already knows everything *before* a node; this pass
/// folds in everything *after* it. Walking the same topological order in
/// reverse, every node is finalised before any of its predecessors, so each
/// predecessor can take over the node's accumulated value minus the slack of
/// the connecting edge.
///
/// This is the DAG analogue of the critical-path "total float" computation:
/// `distance` is the earliest-finish value, `accumulated` the length of the
/// critical path that the node is embedded in.
use tracing::{debug, trace};

use crate::graph::TrackGraph;

/// Computes, for every node `v`, the length of the longest path in the whole
/// graph that passes through `v`.
///
/// `order` must be the topological order used for the forward pass and
/// `distances` its result. Returns a freshly allocated array with
/// `accumulated[v] >= distances[v]` for every node; equality holds exactly
/// when `v` is the terminal node of its own longest track.
///
/// For an edge `p→s`, the slack `distances[s] - distances[p] - weight[s]`
/// measures how far `p` falls short of being `s`'s tightest predecessor.
/// A track through `p` and `s` is therefore `accumulated[s]` shortened by
/// exactly that slack, and `accumulated[p]` is the maximum over all of `p`'s
/// outgoing edges. The slack is non-negative (the forward pass relaxed this
/// edge), so the subtraction cannot underflow.
pub fn accumulate(graph: &TrackGraph, order: &[u32], distances: &[u64]) -> Vec<u64> {
    let mut accumulated: Vec<u64> = distances.to_vec();

    for &s in order.iter().rev() {
        for &p in graph.incoming(s) {
            let slack = distances[s as usize] - distances[p as usize] - graph.weight(s);
            let candidate = accumulated[s as usize] - slack;
            if candidate > accumulated[p as usize] {
                trace!(
                    src = p,
                    tgt = s,
                    slack,
                    old = accumulated[p as usize],
                    new = candidate,
                    "propagated accumulated length"
                );
                accumulated[p as usize] = candidate;
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "backward accumulation pass complete"
    );

    accumulated
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
