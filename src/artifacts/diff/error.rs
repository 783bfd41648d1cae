use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
    /// The forward search ran out of depths before reaching the end of both
    /// documents. Finite inputs never get here.
    #[error(
        "no edit path found between documents of {previous} and {current} lines within {max_depth} edits"
    )]
    SearchExhausted {
        previous: usize,
        current: usize,
        max_depth: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_exhaustion_names_both_document_sizes() {
        let error = DiffError::SearchExhausted {
            previous: 3,
            current: 4,
            max_depth: 7,
        };

        assert_eq!(
            error.to_string(),
            "no edit path found between documents of 3 and 4 lines within 7 edits"
        );
    }
}
