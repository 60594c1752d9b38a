#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod file;
pub mod graph;

pub use file::{TrackDecodeError, TrackFile, parse_track_file};
pub use graph::{
    CycleError, FilterError, FilteredEdges, GraphBuildError, TrackAnalysis, TrackGraph, accumulate,
    analyze, build_graph, filter_edges, max_distances, topological_order,
};

/// Returns the current version of the tracklet-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
