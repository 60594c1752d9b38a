//! Entry point for the `tracklet` binary: argument parsing, logging setup,
//! input loading, and dispatch to the subcommand modules.
use clap::Parser;

mod cli;
mod cmd;
mod error;
mod io;

use cli::{Cli, Command, PathOrStdin};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Dispatches the parsed CLI to the matching command module.
fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Filter {
            input,
            min_length,
            format,
        } => {
            let file = load(input)?;
            cmd::filter::run(&file, *min_length, format)
        }
        Command::Analyze { input, format } => {
            let file = load(input)?;
            cmd::analyze::run(&file, format)
        }
        Command::Version => {
            println!("{}", tracklet_core::version());
            Ok(())
        }
    }
}

/// Reads and parses a track document from a path or stdin.
fn load(input: &PathOrStdin) -> Result<tracklet_core::TrackFile, CliError> {
    let text = io::read_input(input)?;
    tracklet_core::parse_track_file(&text).map_err(|e| CliError::ParseError {
        detail: e.to_string(),
    })
}

/// Installs the stderr tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `--verbose` selects
/// `debug` and the default is `warn`, keeping pass-level logging out of the
/// way of the machine-readable stdout.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
