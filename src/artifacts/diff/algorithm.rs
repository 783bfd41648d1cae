use crate::artifacts::diff::context::ContextWindow;
use crate::artifacts::diff::diff_record::DiffRecord;
use crate::artifacts::diff::error::DiffError;
use crate::artifacts::diff::myers::Myers;
use crate::artifacts::document::document::Document;
use std::fmt::Display;
use std::str::FromStr;

/// Computes the classified line records turning `previous` into `current`
pub trait DiffAlgorithm {
    fn compute_diff(
        &self,
        previous: &Document,
        current: &Document,
        context: ContextWindow,
    ) -> Result<Vec<DiffRecord>, DiffError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Myers,
}

pub const ALGORITHMS: phf::Map<&'static str, Algorithm> = phf::phf_map! {
    "myers" => Algorithm::Myers,
};

impl Algorithm {
    pub fn try_parse(name: &str) -> Result<Self, DiffError> {
        ALGORITHMS
            .get(name)
            .copied()
            .ok_or_else(|| DiffError::UnknownAlgorithm(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Myers => "myers",
        }
    }

    pub fn names() -> Vec<&'static str> {
        let mut names = ALGORITHMS.keys().copied().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

impl DiffAlgorithm for Algorithm {
    fn compute_diff(
        &self,
        previous: &Document,
        current: &Document,
        context: ContextWindow,
    ) -> Result<Vec<DiffRecord>, DiffError> {
        match self {
            Algorithm::Myers => Myers.compute_diff(previous, current, context),
        }
    }
}

impl FromStr for Algorithm {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
