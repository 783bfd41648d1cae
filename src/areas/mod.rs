//! Invocation state
//!
//! - `options`: algorithm, context width, color and paging settings
//! - `session`: the options together with the output writer

pub mod options;
pub mod session;
