use crate::artifacts::diff::diff_record::DiffRecord;
use std::collections::VecDeque;
use std::fmt::Display;

/// How many unchanged lines to keep around every change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextWindow {
    /// Keep every record
    #[default]
    Unlimited,
    Lines(usize),
}

impl ContextWindow {
    /// Drops unchanged records that are not within `n` lines of a change.
    ///
    /// Unchanged records seen since the last change wait in a buffer capped at
    /// `n`; a change flushes that buffer as leading context and then lets the
    /// next `n` unchanged records through as trailing context.
    pub fn apply(&self, records: Vec<DiffRecord>) -> Vec<DiffRecord> {
        let width = match *self {
            ContextWindow::Unlimited => return records,
            ContextWindow::Lines(width) => width,
        };

        let mut windowed = Vec::with_capacity(records.len());
        let mut pending = VecDeque::with_capacity(width);
        let mut trailing_budget = 0;

        for record in records {
            if !record.is_unchanged() {
                windowed.extend(pending.drain(..));
                windowed.push(record);
                trailing_budget = width;
            } else if trailing_budget > 0 {
                windowed.push(record);
                trailing_budget -= 1;
            } else {
                pending.push_back(record);
                if pending.len() > width {
                    pending.pop_front();
                }
            }
        }

        windowed
    }
}

impl From<isize> for ContextWindow {
    fn from(lines: isize) -> Self {
        if lines < 0 {
            ContextWindow::Unlimited
        } else {
            ContextWindow::Lines(lines as usize)
        }
    }
}

impl From<usize> for ContextWindow {
    fn from(lines: usize) -> Self {
        ContextWindow::Lines(lines)
    }
}

impl Display for ContextWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextWindow::Unlimited => write!(f, "unlimited"),
            ContextWindow::Lines(lines) => write!(f, "{lines}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::diff_record::DiffKind;
    use crate::artifacts::document::line::Line;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn same(number: isize) -> DiffRecord {
        let text = format!("line {number}");
        DiffRecord::unchanged(Line::new(text.clone(), number), Line::new(text, number))
    }

    fn removed(number: isize) -> DiffRecord {
        DiffRecord::deleted(Line::new(format!("old {number}"), number))
    }

    fn line_numbers(records: &[DiffRecord]) -> Vec<isize> {
        records
            .iter()
            .map(|record| match record.kind() {
                DiffKind::Added => record.new_line().line_number(),
                _ => record.old_line().line_number(),
            })
            .collect()
    }

    // ten unchanged lines with deletions at 3 and 9
    #[fixture]
    fn records() -> Vec<DiffRecord> {
        (1..=10)
            .map(|n| if n == 3 || n == 9 { removed(n) } else { same(n) })
            .collect()
    }

    #[rstest]
    fn unlimited_window_keeps_everything(records: Vec<DiffRecord>) {
        let windowed = ContextWindow::Unlimited.apply(records.clone());

        assert_eq!(windowed, records);
    }

    #[rstest]
    #[case(0, vec![3, 9])]
    #[case(1, vec![2, 3, 4, 8, 9, 10])]
    #[case(2, vec![1, 2, 3, 4, 5, 7, 8, 9, 10])]
    #[case(3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10])]
    fn window_keeps_lines_near_changes(
        records: Vec<DiffRecord>,
        #[case] width: usize,
        #[case] expected: Vec<isize>,
    ) {
        let windowed = ContextWindow::Lines(width).apply(records);

        assert_eq!(line_numbers(&windowed), expected);
    }

    #[test]
    fn window_without_changes_is_empty() {
        let records = (1..=4).map(same).collect::<Vec<_>>();

        assert!(ContextWindow::Lines(2).apply(records).is_empty());
    }

    #[rstest]
    #[case(-1, ContextWindow::Unlimited)]
    #[case(-42, ContextWindow::Unlimited)]
    #[case(0, ContextWindow::Lines(0))]
    #[case(3, ContextWindow::Lines(3))]
    fn negative_line_count_means_unlimited(#[case] lines: isize, #[case] expected: ContextWindow) {
        assert_eq!(ContextWindow::from(lines), expected);
    }
}
