/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `tracklet` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2** — input failure: the tool could not read or parse the
///   input at all. These errors terminate early before any analysis runs.
/// - Exit code **1** — logical failure: the tool ran to completion but the
///   result is a well-defined failure (the document's graph has a cycle).
///
/// An empty surviving edge set is **not** an error; filtering everything
/// away still exits 0.
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `tracklet` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the input size cap.
    FileTooLarge {
        /// A human-readable label for the source (`"-"` for stdin, or the
        /// filesystem path).
        source: String,
        /// The size cap in bytes.
        limit: u64,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a valid JSON track document.
    ParseError {
        /// The underlying decode error message.
        detail: String,
    },

    /// The document parsed but its edge lists failed validation (length
    /// mismatch, short weight list, zero weight).
    InvalidEdgeList {
        /// The underlying build error message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The document's graph contains a cycle; no track analysis exists.
    CyclicGraph {
        /// The underlying cycle error message.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2` — input failure (file not found, parse error, etc.).
    /// - `1` — logical failure (cyclic graph).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseError { .. }
            | Self::InvalidEdgeList { .. } => 2,

            Self::CyclicGraph { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge { source, limit } => {
                format!("error: input too large: {source} exceeds limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::ParseError { detail } => {
                format!("error: {detail}")
            }
            Self::InvalidEdgeList { detail } => {
                format!("error: invalid edge list: {detail}")
            }
            Self::CyclicGraph { detail } => {
                format!("error: {detail}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::path::PathBuf;

    use super::*;

    #[test]
    fn input_failures_are_exit_2() {
        let errors = [
            CliError::FileNotFound {
                path: PathBuf::from("tracks.json"),
            },
            CliError::PermissionDenied {
                path: PathBuf::from("/root/tracks.json"),
            },
            CliError::FileTooLarge {
                source: "big.json".to_owned(),
                limit: 1024,
            },
            CliError::InvalidUtf8 {
                source: "bad.json".to_owned(),
                byte_offset: 42,
            },
            CliError::StdinReadError {
                detail: "broken pipe".to_owned(),
            },
            CliError::IoError {
                source: "tracks.json".to_owned(),
                detail: "interrupted".to_owned(),
            },
            CliError::ParseError {
                detail: "expected value".to_owned(),
            },
            CliError::InvalidEdgeList {
                detail: "edge list length mismatch".to_owned(),
            },
        ];
        for e in errors {
            assert_eq!(e.exit_code(), 2, "{e:?} should be exit 2");
        }
    }

    #[test]
    fn cyclic_graph_is_exit_1() {
        let e = CliError::CyclicGraph {
            detail: "graph contains a cycle".to_owned(),
        };
        assert_eq!(e.exit_code(), 1);
    }

    #[test]
    fn messages_start_with_error_prefix() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("tracks.json"),
        };
        assert!(e.message().starts_with("error: "));
        assert!(e.message().contains("tracks.json"));
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::ParseError {
            detail: "bad document".to_owned(),
        };
        assert_eq!(e.to_string(), e.message());
    }
}
