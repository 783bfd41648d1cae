use crate::artifacts::document::line::Line;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Unchanged,
    Added,
    Deleted,
}

impl DiffKind {
    pub fn marker(&self) -> char {
        match self {
            DiffKind::Unchanged => ' ',
            DiffKind::Added => '+',
            DiffKind::Deleted => '-',
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, DiffKind::Unchanged)
    }
}

/// One classified line of a diff.
///
/// `Added` records carry an absent `old` line, `Deleted` records an absent
/// `new` line. `Unchanged` records carry both sides with equal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRecord {
    old: Line,
    new: Line,
    kind: DiffKind,
}

impl DiffRecord {
    pub fn added(new: Line) -> Self {
        Self {
            old: Line::absent(),
            new,
            kind: DiffKind::Added,
        }
    }

    pub fn deleted(old: Line) -> Self {
        Self {
            old,
            new: Line::absent(),
            kind: DiffKind::Deleted,
        }
    }

    pub fn unchanged(old: Line, new: Line) -> Self {
        debug_assert_eq!(old.text(), new.text());

        Self {
            old,
            new,
            kind: DiffKind::Unchanged,
        }
    }

    pub fn old_line(&self) -> &Line {
        &self.old
    }

    pub fn new_line(&self) -> &Line {
        &self.new
    }

    pub fn kind(&self) -> DiffKind {
        self.kind
    }

    pub fn is_unchanged(&self) -> bool {
        self.kind == DiffKind::Unchanged
    }

    pub fn text(&self) -> &str {
        if self.new.is_present() {
            self.new.text()
        } else {
            self.old.text()
        }
    }
}

impl Display for DiffRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind.marker(), self.text())
    }
}
