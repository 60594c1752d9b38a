//! Implementation of `tracklet filter <file> --min-length <n>`.
//!
//! Parses a track document, prunes every edge that lies on no track of
//! accumulated length at least `--min-length`, and writes the survivors to
//! stdout.
//!
//! Output (human mode): one surviving edge per line as `src -> tgt`, in the
//! input's edge order.
//! Output (JSON mode): `{"sources": [...], "targets": [...], "count": N}`.
//!
//! Exit codes: 0 = filtering ran (even if nothing survived), 1 = the graph
//! has a cycle, 2 = parse/validation failure.
use tracklet_core::{FilterError, FilteredEdges, TrackFile, filter_edges};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Runs the `filter` command.
///
/// # Errors
///
/// - [`CliError::InvalidEdgeList`] (exit code 2) if the document's arrays
///   fail validation.
/// - [`CliError::CyclicGraph`] (exit code 1) if the graph has a cycle.
pub fn run(file: &TrackFile, min_length: u64, format: &OutputFormat) -> Result<(), CliError> {
    let result = filter_edges(&file.sources, &file.targets, &file.weights, min_length)
        .map_err(filter_error_to_cli)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &result),
        OutputFormat::Json => print_json(&mut out, &result),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes surviving edges in human-readable format: one `src -> tgt` line
/// per edge.
fn print_human<W: std::io::Write>(w: &mut W, result: &FilteredEdges) -> std::io::Result<()> {
    for (&src, &tgt) in result.sources.iter().zip(result.targets.iter()) {
        writeln!(w, "{src} -> {tgt}")?;
    }
    Ok(())
}

/// Writes surviving edges as a JSON object
/// `{"sources": [...], "targets": [...], "count": N}`.
fn print_json<W: std::io::Write>(w: &mut W, result: &FilteredEdges) -> std::io::Result<()> {
    let mut obj = serde_json::Map::new();
    obj.insert(
        "sources".to_owned(),
        serde_json::Value::Array(
            result
                .sources
                .iter()
                .map(|&i| serde_json::Value::Number(i.into()))
                .collect(),
        ),
    );
    obj.insert(
        "targets".to_owned(),
        serde_json::Value::Array(
            result
                .targets
                .iter()
                .map(|&i| serde_json::Value::Number(i.into()))
                .collect(),
        ),
    );
    obj.insert(
        "count".to_owned(),
        serde_json::Value::Number(result.len().into()),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

/// Converts a core [`FilterError`] to the appropriate [`CliError`].
fn filter_error_to_cli(e: FilterError) -> CliError {
    match e {
        FilterError::Build(build) => CliError::InvalidEdgeList {
            detail: build.to_string(),
        },
        FilterError::Cycle(cycle) => CliError::CyclicGraph {
            detail: cycle.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn edges(sources: &[u32], targets: &[u32]) -> FilteredEdges {
        FilteredEdges {
            sources: sources.to_vec(),
            targets: targets.to_vec(),
        }
    }

    #[test]
    fn human_output_is_one_edge_per_line() {
        let mut buf = Vec::new();
        print_human(&mut buf, &edges(&[0, 1], &[1, 2])).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(text, "0 -> 1\n1 -> 2\n");
    }

    #[test]
    fn json_output_has_parallel_arrays_and_count() {
        let mut buf = Vec::new();
        print_json(&mut buf, &edges(&[0, 1], &[1, 2])).expect("write to vec");
        let value: serde_json::Value =
            serde_json::from_slice(&buf).expect("output should be valid JSON");
        assert_eq!(value["count"], 2);
        assert_eq!(value["sources"], serde_json::json!([0, 1]));
        assert_eq!(value["targets"], serde_json::json!([1, 2]));
    }

    #[test]
    fn cycle_maps_to_exit_1() {
        let file = TrackFile {
            sources: vec![0, 1],
            targets: vec![1, 0],
            weights: vec![],
            extra: serde_json::Map::new(),
        };
        let err = run(&file, 1, &OutputFormat::Human).expect_err("cycle should fail");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn bad_edge_list_maps_to_exit_2() {
        let file = TrackFile {
            sources: vec![0, 1],
            targets: vec![1],
            weights: vec![],
            extra: serde_json::Map::new(),
        };
        let err = run(&file, 1, &OutputFormat::Human).expect_err("mismatch should fail");
        assert_eq!(err.exit_code(), 2);
    }
}
