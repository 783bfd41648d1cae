use crate::artifacts::document::line::Line;
use std::ops::Index;

/// An ordered sequence of lines, each tagged with its 1-based line number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Splits raw text on line boundaries.
    ///
    /// Empty text yields an empty document rather than a single empty line,
    /// and a trailing newline does not open an extra line.
    pub fn parse(text: &str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(index, text)| Line::new(text.to_string(), index as isize + 1))
            .collect();

        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    pub fn text_at(&self, index: usize) -> &str {
        self.lines[index].text()
    }
}

impl Index<usize> for Document {
    type Output = Line;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lines[index]
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl FromIterator<String> for Document {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let lines = iter
            .into_iter()
            .enumerate()
            .map(|(index, text)| Line::new(text, index as isize + 1))
            .collect();

        Self { lines }
    }
}

impl<'d> IntoIterator for &'d Document {
    type Item = &'d Line;
    type IntoIter = std::slice::Iter<'d, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
