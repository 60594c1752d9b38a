//! One module per subcommand, each exposing a `run` function that takes the
//! pre-parsed track document and the command's flags.
pub mod analyze;
pub mod filter;
