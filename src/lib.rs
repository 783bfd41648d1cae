//! Line-level diffs of two text documents
//!
//! Documents are split into numbered lines, compared with a selectable
//! algorithm (Myers' by default) and rendered as unchanged, added and deleted
//! lines, optionally trimmed to a few lines of context around each change.

pub mod areas;
pub mod artifacts;
pub mod commands;
