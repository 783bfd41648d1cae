//! Diff data structures and algorithms
//!
//! - `core`: output plumbing (pager wrapper, paging decision)
//! - `document`: documents split into numbered lines
//! - `diff`: diff algorithms, edit paths and context windowing

pub mod core;
pub mod diff;
pub mod document;
