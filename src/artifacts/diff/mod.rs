//! Line diffing
//!
//! - `algorithm`: the `DiffAlgorithm` capability and the registry of named strategies
//! - `myers`: Myers' diff, from edit graph search to classified records
//! - `frontier`: per-depth snapshots of the furthest reach on every diagonal
//! - `edit_path`: moves through the edit graph
//! - `context`: trimming unchanged lines down to a context window
//! - `diff_record`: the classified output lines
//! - `error`: failures of algorithm selection and search

pub mod algorithm;
pub mod context;
pub mod diff_record;
pub mod edit_path;
pub mod error;
pub mod frontier;
pub mod myers;
