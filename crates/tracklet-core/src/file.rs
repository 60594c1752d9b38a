/// Track document representation and JSON parsing.
///
/// [`TrackFile`] is the root type for a serialised/deserialised track
/// document — the edge-list form in which candidate graphs arrive from the
/// host process. It is deliberately thin: three parallel arrays and nothing
/// else. All graph semantics live in [`crate::graph`].
///
/// # Unknown field preservation
///
/// The `extra` catch-all (`#[serde(flatten)]`) absorbs every JSON key that is
/// not explicitly declared on the struct, so a document written by a newer
/// producer round-trips through an older `tracklet-core` without data loss.
/// Do not add `#[serde(deny_unknown_fields)]` here.
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TrackFile
// ---------------------------------------------------------------------------

/// The top-level track document.
///
/// Deserialise from JSON with [`parse_track_file`]; serialise back with
/// [`serde_json::to_string`] etc.
///
/// # Fields
///
/// - `sources` / `targets` — parallel arrays of dense zero-based node
///   indices; entry `i` describes the directed edge
///   `sources[i] → targets[i]`.
/// - `weights` — optional per-node weights. An empty (or absent) array means
///   every node weighs 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackFile {
    /// Edge source node indices.
    pub sources: Vec<u32>,

    /// Edge target node indices. Must have the same length as `sources`.
    pub targets: Vec<u32>,

    /// Per-node weights; empty means "all weights = 1".
    ///
    /// When non-empty, the array must cover every node index referenced by
    /// `sources` and `targets`. Enforced by [`crate::graph::build_graph`],
    /// not at parse time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weights: Vec<u64>,

    /// Catch-all for unknown top-level keys, preserved on round-trip.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// TrackDecodeError
// ---------------------------------------------------------------------------

/// Errors that can occur while decoding a track document from JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackDecodeError {
    /// The input is not valid JSON, or does not match the [`TrackFile`]
    /// shape.
    InvalidJson {
        /// The underlying serde_json error message.
        detail: String,
        /// 1-based line of the first offending byte.
        line: usize,
        /// 1-based column of the first offending byte.
        column: usize,
    },
}

impl std::fmt::Display for TrackDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackDecodeError::InvalidJson {
                detail,
                line,
                column,
            } => {
                write!(
                    f,
                    "invalid track document at line {line} column {column}: {detail}"
                )
            }
        }
    }
}

impl std::error::Error for TrackDecodeError {}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses a JSON track document into a [`TrackFile`].
///
/// # Errors
///
/// Returns [`TrackDecodeError::InvalidJson`] with line/column detail when the
/// input is not valid JSON or does not match the expected shape. Length and
/// weight-coverage validation is deferred to [`crate::graph::build_graph`].
pub fn parse_track_file(input: &str) -> Result<TrackFile, TrackDecodeError> {
    serde_json::from_str(input).map_err(|e| TrackDecodeError::InvalidJson {
        detail: e.to_string(),
        line: e.line(),
        column: e.column(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
