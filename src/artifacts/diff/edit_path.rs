use derive_new::new;
use std::fmt::Display;

pub type Point = (usize, usize);

/// A single step through the edit graph, from `(x1, y1)` to `(x2, y2)`.
///
/// Coordinates are document indices: `x` walks the previous document and `y`
/// the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Move {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl Move {
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(start.0, start.1, end.0, end.1)
    }

    pub fn start(&self) -> Point {
        (self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        (self.x2, self.y2)
    }

    /// Only `y` advances: `current[y1]` was inserted
    pub fn is_insertion(&self) -> bool {
        self.x1 == self.x2
    }

    /// Only `x` advances: `previous[x1]` was deleted
    pub fn is_deletion(&self) -> bool {
        self.y1 == self.y2
    }

    pub fn is_diagonal(&self) -> bool {
        !self.is_insertion() && !self.is_deletion()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_moves_by_the_axis_that_advances() {
        assert!(Move::between((1, 1), (2, 2)).is_diagonal());
        assert!(Move::between((1, 1), (2, 1)).is_deletion());
        assert!(Move::between((1, 1), (1, 2)).is_insertion());
    }
}
