//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`]. This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text (default).
    Human,
    /// A single structured JSON object.
    Json,
}

/// Root CLI type for the `tracklet` binary.
#[derive(Parser)]
#[command(name = "tracklet", about = "Track candidate graph pruning")]
pub struct Cli {
    /// Raise stderr logging to debug level (pass summaries and timings).
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// All `tracklet` subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Drop every edge that lies on no sufficiently long track
    Filter {
        /// Track document to read, or `-` for stdin
        input: PathOrStdin,

        /// Minimum accumulated track length both endpoints of a surviving
        /// edge must reach
        #[arg(long)]
        min_length: u64,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Print per-node distance and accumulated track length
    Analyze {
        /// Track document to read, or `-` for stdin
        input: PathOrStdin,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Print the tracklet-core library version
    Version,
}
