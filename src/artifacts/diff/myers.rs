//! Myers' O(ND) difference algorithm over lines
//!
//! The search walks the edit graph between the two documents one edit
//! distance at a time, keeping a snapshot of the diagonal frontier for every
//! depth. Backtracking replays those snapshots from the end of both documents
//! down to the origin, and the resulting path is classified into diff records.

use crate::artifacts::diff::algorithm::DiffAlgorithm;
use crate::artifacts::diff::context::ContextWindow;
use crate::artifacts::diff::diff_record::DiffRecord;
use crate::artifacts::diff::edit_path::{Move, Point};
use crate::artifacts::diff::error::DiffError;
use crate::artifacts::diff::frontier::{Frontier, Trace};
use crate::artifacts::document::document::Document;
use derive_new::new;
use log::{debug, trace};

const ORIGIN: Point = (0, 0);

/// Myers' algorithm as a selectable strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Myers;

impl DiffAlgorithm for Myers {
    fn compute_diff(
        &self,
        previous: &Document,
        current: &Document,
        context: ContextWindow,
    ) -> Result<Vec<DiffRecord>, DiffError> {
        let records = MyersDiff::new(previous, current).diff()?;
        let windowed = context.apply(records);

        debug!("{} records kept with {} context", windowed.len(), context);
        Ok(windowed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d> {
    previous: &'d Document,
    current: &'d Document,
}

impl<'d> MyersDiff<'d> {
    /// Explores the edit graph depth by depth until the bottom-right corner
    /// is reached, returning one frontier snapshot per depth.
    pub fn shortest_edit(&self) -> Result<Trace, DiffError> {
        let (n, m) = (self.previous.len() as isize, self.current.len() as isize);
        let max_depth = (n + m) as usize;

        let mut frontier = Frontier::new(max_depth);
        let mut trace = Trace::new();

        for d in 0..=(n + m) {
            for k in (-d..=d).step_by(2) {
                let mut x = if d == 0 {
                    0
                } else if frontier.previous_diagonal(k, d) == k + 1 {
                    // insertion, moving down from k+1
                    frontier[k + 1]
                } else {
                    // deletion, moving right from k-1
                    frontier[k - 1] + 1
                };

                let mut y = x - k;
                while x < n && y < m && self.matches(x as usize, y as usize) {
                    // snake
                    x += 1;
                    y += 1;
                }

                frontier[k] = x;

                if x >= n && y >= m {
                    debug!("edit distance {d} between {n} and {m} lines");
                    trace.push(frontier);
                    return Ok(trace);
                }
            }

            trace.push(frontier.clone());
        }

        Err(DiffError::SearchExhausted {
            previous: n as usize,
            current: m as usize,
            max_depth,
        })
    }

    /// Replays the trace backwards from `(N, M)` and returns the moves of one
    /// shortest edit path, last move first.
    pub fn backtrack(&self, trace: &Trace) -> Vec<Move> {
        let (mut x, mut y) = (self.previous.len() as isize, self.current.len() as isize);
        let mut path = Vec::new();

        for (d, frontier) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let (prev_x, prev_y) = if d == 0 {
                (0, 0)
            } else {
                let prev_k = frontier.previous_diagonal(k, d);
                let prev_x = frontier[prev_k];
                (prev_x, prev_x - prev_k)
            };

            while x > prev_x && y > prev_y {
                path.push(Move::new(
                    (x - 1) as usize,
                    (y - 1) as usize,
                    x as usize,
                    y as usize,
                ));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                path.push(Move::between(
                    (prev_x as usize, prev_y as usize),
                    (x as usize, y as usize),
                ));
            }

            (x, y) = (prev_x, prev_y);
        }

        Self::close_at_origin(&mut path, (x as usize, y as usize));
        trace!("edit path of {} moves", path.len());

        path
    }

    /// Diff records for the full edit path, in document order
    pub fn diff(&self) -> Result<Vec<DiffRecord>, DiffError> {
        if self.previous.is_empty() {
            return Ok(self.current.iter().cloned().map(DiffRecord::added).collect());
        }
        if self.current.is_empty() {
            return Ok(self
                .previous
                .iter()
                .cloned()
                .map(DiffRecord::deleted)
                .collect());
        }

        let trace = self.shortest_edit()?;
        let mut path = self.backtrack(&trace);
        path.reverse();

        Ok(path.into_iter().map(|step| self.record_for(step)).collect())
    }

    fn record_for(&self, step: Move) -> DiffRecord {
        if step.is_insertion() {
            DiffRecord::added(self.current[step.y1].clone())
        } else if step.is_deletion() {
            DiffRecord::deleted(self.previous[step.x1].clone())
        } else {
            DiffRecord::unchanged(
                self.previous[step.x1].clone(),
                self.current[step.y1].clone(),
            )
        }
    }

    // The walk must finish on the origin. When it stops short, the remaining
    // stretch is closed with a boundary move unless the last recorded move
    // already starts there.
    fn close_at_origin(path: &mut Vec<Move>, position: Point) {
        let starts_at_origin = path.last().is_some_and(|step| step.start() == ORIGIN);

        if !starts_at_origin && position != ORIGIN {
            path.push(Move::between(ORIGIN, position));
        }
    }

    fn matches(&self, x: usize, y: usize) -> bool {
        self.previous.text_at(x) == self.current.text_at(y)
    }
}
