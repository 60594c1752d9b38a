//! Track graph generator and benchmark utilities.
//!
//! This crate provides deterministic generation of realistic candidate
//! graphs — layered tracks with merges, splits, and shortcut edges — for
//! benchmarking and invariant testing of `tracklet-core`.

pub mod generator;

pub use generator::{GeneratedTracks, GeneratorConfig, SizeTier, generate_tracks};
