use std::ops::{Index, IndexMut};

/// Furthest x-coordinate reached on every diagonal `k = x - y`.
///
/// Diagonals range over `-max_depth..=max_depth`; the offset into the backing
/// buffer stays private to this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    cells: Vec<isize>,
    offset: isize,
}

impl Frontier {
    pub fn new(max_depth: usize) -> Self {
        Self {
            cells: vec![0; 2 * max_depth + 1],
            offset: max_depth as isize,
        }
    }

    pub fn max_depth(&self) -> isize {
        self.offset
    }

    /// Diagonal the step into `k` at depth `d` comes from.
    ///
    /// The edge diagonals have a single neighbour. Inside, the move reaching
    /// the larger x wins and a tie favours the insertion from `k + 1`.
    pub fn previous_diagonal(&self, k: isize, d: isize) -> isize {
        if k == -d || (k != d && self[k - 1] < self[k + 1]) {
            k + 1
        } else {
            k - 1
        }
    }

    fn slot(&self, k: isize) -> usize {
        debug_assert!(k.abs() <= self.offset, "diagonal {k} out of range");
        (self.offset + k) as usize
    }
}

impl Index<isize> for Frontier {
    type Output = isize;

    fn index(&self, k: isize) -> &Self::Output {
        &self.cells[self.slot(k)]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut Self::Output {
        let slot = self.slot(k);
        &mut self.cells[slot]
    }
}

/// One frontier snapshot per explored depth, oldest first
pub type Trace = Vec<Frontier>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn negative_diagonals_are_addressable() {
        let mut frontier = Frontier::new(3);
        frontier[-3] = 7;
        frontier[3] = 9;

        assert_eq!(frontier[-3], 7);
        assert_eq!(frontier[3], 9);
        assert_eq!(frontier[0], 0);
    }

    #[test]
    fn edge_diagonals_have_a_single_neighbour() {
        let mut frontier = Frontier::new(2);
        frontier[-1] = 5;
        frontier[1] = 0;

        assert_eq!(frontier.previous_diagonal(-2, 2), -1);
        assert_eq!(frontier.previous_diagonal(2, 2), 1);
    }

    #[test]
    fn inner_diagonal_prefers_insertion_on_equal_reach() {
        let mut frontier = Frontier::new(2);
        // deletion from k-1 reaches 1 + 1, insertion from k+1 reaches 2
        frontier[-1] = 1;
        frontier[1] = 2;
        assert_eq!(frontier.previous_diagonal(0, 2), 1);

        frontier[-1] = 2;
        assert_eq!(frontier.previous_diagonal(0, 2), -1);
    }
}
