/// Edge filtering on accumulated track length, and the one-call pipeline.
///
/// [`filter_edges`] is the boundary the host process calls: parallel edge
/// lists in, surviving parallel edge lists out. Internally it is a straight
/// pipeline — build, order, forward pass, backward pass, filter — with no
/// state carried between invocations; every call analyses a fresh graph from
/// scratch.
use tracing::debug;

use crate::graph::accumulate::accumulate;
use crate::graph::distance::max_distances;
use crate::graph::topo::{CycleError, topological_order};
use crate::graph::{GraphBuildError, TrackGraph, build_graph};

// ---------------------------------------------------------------------------
// TrackAnalysis
// ---------------------------------------------------------------------------

/// Per-node results of the two analysis passes over one graph.
///
/// Produced by [`analyze`]; consumed by [`filter_edges`] and by callers that
/// want the raw per-node values (e.g. the CLI's inspection command).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackAnalysis {
    /// The topological order the passes swept in.
    pub order: Vec<u32>,
    /// Longest weighted path ending at each node.
    pub distances: Vec<u64>,
    /// Longest weighted path passing through each node.
    pub accumulated: Vec<u64>,
}

/// Runs the topological ordering and both passes over `graph`.
///
/// # Errors
///
/// Returns [`CycleError`] when the graph is not acyclic. No partial result
/// is produced.
pub fn analyze(graph: &TrackGraph) -> Result<TrackAnalysis, CycleError> {
    let order = topological_order(graph)?;
    let distances = max_distances(graph, &order);
    let accumulated = accumulate(graph, &order, &distances);
    Ok(TrackAnalysis {
        order,
        distances,
        accumulated,
    })
}

// ---------------------------------------------------------------------------
// FilteredEdges
// ---------------------------------------------------------------------------

/// The surviving edges of a filtering run, as parallel index arrays.
///
/// Order-preserving with respect to the surviving subset of the input edge
/// list: if edge `i` survives and edge `j > i` survives, edge `i` still
/// precedes edge `j` here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredEdges {
    /// Source indices of the surviving edges.
    pub sources: Vec<u32>,
    /// Target indices of the surviving edges.
    pub targets: Vec<u32>,
}

impl FilteredEdges {
    /// Returns the number of surviving edges.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` when no edge survived.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

// ---------------------------------------------------------------------------
// FilterError
// ---------------------------------------------------------------------------

/// Errors that can occur during a [`filter_edges`] run.
///
/// Both variants are fatal to the call; no partial edge list is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The edge-list arrays failed validation.
    Build(GraphBuildError),
    /// The implied graph contains a cycle.
    Cycle(CycleError),
}

impl From<GraphBuildError> for FilterError {
    fn from(e: GraphBuildError) -> Self {
        FilterError::Build(e)
    }
}

impl From<CycleError> for FilterError {
    fn from(e: CycleError) -> Self {
        FilterError::Cycle(e)
    }
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::Build(e) => e.fmt(f),
            FilterError::Cycle(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilterError::Build(e) => Some(e),
            FilterError::Cycle(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// filter_edges
// ---------------------------------------------------------------------------

/// Removes every edge that does not lie on a track of accumulated length at
/// least `track_length_constraint`.
///
/// An edge survives iff **both** of its endpoints have an accumulated value
/// clearing the threshold: a node below the threshold is on no sufficiently
/// long track, so every edge touching it is discarded. Surviving edges keep
/// their relative input order. Branching subgraphs survive intact when every
/// involved node clears the bar; there is no guarantee the surviving
/// subgraph is connected.
///
/// The function is pure: it builds a fresh graph, runs both passes, filters,
/// and discards everything but the returned edge lists. Empty input returns
/// two empty sequences.
///
/// # Errors
///
/// - [`FilterError::Build`] — mismatched edge lists, short weight list, or
///   a zero weight.
/// - [`FilterError::Cycle`] — the implied graph is not acyclic.
pub fn filter_edges(
    sources: &[u32],
    targets: &[u32],
    weights: &[u64],
    track_length_constraint: u64,
) -> Result<FilteredEdges, FilterError> {
    let graph = build_graph(sources, targets, weights)?;
    let analysis = analyze(&graph)?;

    let mut result = FilteredEdges::default();
    for &(src, tgt) in graph.edges() {
        if analysis.accumulated[src as usize] >= track_length_constraint
            && analysis.accumulated[tgt as usize] >= track_length_constraint
        {
            result.sources.push(src);
            result.targets.push(tgt);
        }
    }

    debug!(
        input_edges = graph.edge_count(),
        surviving_edges = result.len(),
        threshold = track_length_constraint,
        "edge filter complete"
    );

    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
