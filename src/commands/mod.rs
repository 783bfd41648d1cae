//! Command implementations
//!
//! - `diff`: compute the line diff of two texts and print it

pub mod diff;
