//! Document model
//!
//! - `line`: a single line of text and its original line number
//! - `document`: the ordered lines of one side of a diff

pub mod document;
pub mod line;
