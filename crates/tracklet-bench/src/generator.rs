//! Layered DAG generator with deterministic output.
//!
//! Nodes are arranged in layers and every edge points from a lower layer to
//! a strictly higher one, so the generated graph is acyclic by construction
//! — no post-hoc cycle breaking is needed. Each non-root node picks one or
//! two predecessors in the previous layer (producing chains that merge and
//! split), and a configurable number of shortcut edges jump across layers
//! the way spurious detector connections do.
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for the track graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of layers; the longest possible track visits one node per layer.
    pub layers: usize,
    /// Nodes per layer.
    pub nodes_per_layer: usize,
    /// Number of additional cross-layer shortcut edges.
    pub shortcut_edges: usize,
    /// Upper bound (inclusive) for node weights; 1 means unit weights.
    pub max_weight: u64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// ~100 nodes, ~200 edges.
    Small,
    /// ~2,500 nodes, ~4,500 edges.
    Medium,
    /// ~50,000 nodes, ~85,000 edges.
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                layers: 10,
                nodes_per_layer: 10,
                shortcut_edges: 20,
                max_weight: 3,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                layers: 50,
                nodes_per_layer: 50,
                shortcut_edges: 500,
                max_weight: 3,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                layers: 200,
                nodes_per_layer: 250,
                shortcut_edges: 10_000,
                max_weight: 3,
            },
        }
    }
}

/// A generated candidate graph in the parallel edge-list form that
/// `tracklet_core::filter_edges` consumes.
#[derive(Debug, Clone)]
pub struct GeneratedTracks {
    /// Edge source node indices.
    pub sources: Vec<u32>,
    /// Edge target node indices.
    pub targets: Vec<u32>,
    /// Per-node weights, covering every node.
    pub weights: Vec<u64>,
}

impl GeneratedTracks {
    /// Returns the number of nodes in the generated graph.
    pub fn node_count(&self) -> usize {
        self.weights.len()
    }

    /// Returns the number of edges in the generated graph.
    pub fn edge_count(&self) -> usize {
        self.sources.len()
    }
}

/// Generates a layered candidate graph from the configuration.
///
/// The same configuration (including seed) always produces the same graph.
pub fn generate_tracks(config: &GeneratorConfig) -> GeneratedTracks {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let node_count = config.layers * config.nodes_per_layer;
    let node_at = |layer: usize, slot: usize| (layer * config.nodes_per_layer + slot) as u32;

    let mut sources: Vec<u32> = Vec::new();
    let mut targets: Vec<u32> = Vec::new();

    // Chain edges: every node below the top layer picks one or two
    // predecessors in the layer directly above it.
    for layer in 1..config.layers {
        for slot in 0..config.nodes_per_layer {
            let parents = rng.gen_range(1..=2usize);
            for _ in 0..parents {
                let parent_slot = rng.gen_range(0..config.nodes_per_layer);
                sources.push(node_at(layer - 1, parent_slot));
                targets.push(node_at(layer, slot));
            }
        }
    }

    // Shortcut edges: jump from a random layer to any strictly higher one.
    if config.layers >= 2 {
        for _ in 0..config.shortcut_edges {
            let from_layer = rng.gen_range(0..config.layers - 1);
            let to_layer = rng.gen_range(from_layer + 1..config.layers);
            sources.push(node_at(from_layer, rng.gen_range(0..config.nodes_per_layer)));
            targets.push(node_at(to_layer, rng.gen_range(0..config.nodes_per_layer)));
        }
    }

    let weights: Vec<u64> = (0..node_count)
        .map(|_| rng.gen_range(1..=config.max_weight.max(1)))
        .collect();

    GeneratedTracks {
        sources,
        targets,
        weights,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
