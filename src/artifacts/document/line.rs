use derive_new::new;
use std::fmt::Display;

/// Line number carried by the missing side of a diff record
pub const ABSENT_LINE_NUMBER: isize = -1;

#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Line {
    text: String,
    line_number: isize,
}

impl Line {
    pub fn absent() -> Self {
        Self {
            text: String::new(),
            line_number: ABSENT_LINE_NUMBER,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_number(&self) -> isize {
        self.line_number
    }

    pub fn is_absent(&self) -> bool {
        self.line_number == ABSENT_LINE_NUMBER
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
