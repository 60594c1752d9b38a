//! Implementation of `tracklet analyze <file>`.
//!
//! Parses a track document, runs the ordering and both passes, and writes
//! the per-node values to stdout without filtering anything.
//!
//! Output (human mode): one line per node,
//! `node <i>: weight <w> distance <d> accumulated <a>`.
//! Output (JSON mode):
//! `{"weights": [...], "distances": [...], "accumulated": [...], "count": N}`.
//!
//! Exit codes: 0 = analysis ran, 1 = the graph has a cycle, 2 =
//! parse/validation failure.
use tracklet_core::{TrackAnalysis, TrackFile, TrackGraph, analyze, build_graph};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Runs the `analyze` command.
///
/// # Errors
///
/// - [`CliError::InvalidEdgeList`] (exit code 2) if the document's arrays
///   fail validation.
/// - [`CliError::CyclicGraph`] (exit code 1) if the graph has a cycle.
pub fn run(file: &TrackFile, format: &OutputFormat) -> Result<(), CliError> {
    let graph = build_graph(&file.sources, &file.targets, &file.weights).map_err(|e| {
        CliError::InvalidEdgeList {
            detail: e.to_string(),
        }
    })?;

    let analysis = analyze(&graph).map_err(|e| CliError::CyclicGraph {
        detail: e.to_string(),
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &graph, &analysis),
        OutputFormat::Json => print_json(&mut out, &graph, &analysis),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes per-node values in human-readable format, one node per line.
fn print_human<W: std::io::Write>(
    w: &mut W,
    graph: &TrackGraph,
    analysis: &TrackAnalysis,
) -> std::io::Result<()> {
    for u in 0..graph.node_count() {
        writeln!(
            w,
            "node {u}: weight {} distance {} accumulated {}",
            graph.weight(u as u32),
            analysis.distances[u],
            analysis.accumulated[u]
        )?;
    }
    Ok(())
}

/// Writes per-node values as a single JSON object with parallel arrays.
fn print_json<W: std::io::Write>(
    w: &mut W,
    graph: &TrackGraph,
    analysis: &TrackAnalysis,
) -> std::io::Result<()> {
    let mut obj = serde_json::Map::new();
    obj.insert(
        "weights".to_owned(),
        numbers((0..graph.node_count() as u32).map(|u| graph.weight(u))),
    );
    obj.insert(
        "distances".to_owned(),
        numbers(analysis.distances.iter().copied()),
    );
    obj.insert(
        "accumulated".to_owned(),
        numbers(analysis.accumulated.iter().copied()),
    );
    obj.insert(
        "count".to_owned(),
        serde_json::Value::Number(graph.node_count().into()),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

/// Collects an integer iterator into a JSON array value.
fn numbers<I: Iterator<Item = u64>>(values: I) -> serde_json::Value {
    serde_json::Value::Array(values.map(|v| serde_json::Value::Number(v.into())).collect())
}
