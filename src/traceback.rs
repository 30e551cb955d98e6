//! Enumeration of every optimal path through the direction table.
//!
//! The direction table is a DAG rooted at `(m, n)` whose only sink is the
//! origin; each root-to-origin path is one optimal alignment. [`Traceback`]
//! walks it depth-first with an explicit stack, so long sequences never
//! deepen the call stack, and it yields alignments one at a time, so a
//! caller may stop early or cap how many it materializes.
//!
//! Distinct paths produce distinct column sequences, so the enumeration
//! never yields the same alignment twice.

use std::iter::FusedIterator;

use crate::alignment::{Alignment, Column};
use crate::direction::{Direction, DirectionSet};
use crate::error::Result;
use crate::matrix::{DirectionGrid, Grid};

/// A move still to be explored: leave `(i, j)` through `direction`, after
/// truncating the current path to `depth` moves.
#[derive(Debug, Clone, Copy)]
struct Branch {
    i: usize,
    j: usize,
    direction: Direction,
    depth: usize,
}

/// Lazy iterator over all optimal alignments of `first` against `second`.
///
/// Alignments come out in a fixed order: at every cell the diagonal move is
/// explored before up, and up before left.
pub struct Traceback<'t, T> {
    first: &'t [T],
    second: &'t [T],
    directions: &'t DirectionGrid,
    pending: Vec<Branch>,
    /// Moves taken so far, from `(m, n)` towards the origin.
    moves: Vec<Direction>,
    /// Both sequences are empty: the single empty alignment is still owed.
    empty_pending: bool,
}

impl<'t, T> Traceback<'t, T> {
    pub(crate) fn new(first: &'t [T], second: &'t [T], directions: &'t DirectionGrid) -> Self {
        let (m, n) = (first.len(), second.len());
        debug_assert_eq!(directions.rows(), m + 1);
        debug_assert_eq!(directions.cols(), n + 1);

        let mut traceback = Self {
            first,
            second,
            directions,
            pending: Vec::new(),
            moves: Vec::with_capacity(m + n),
            empty_pending: m == 0 && n == 0,
        };
        traceback.push_branches(m, n, 0);
        traceback
    }

    fn push_branches(&mut self, i: usize, j: usize, depth: usize) {
        // Reversed so the diagonal branch sits on top of the stack.
        for direction in self.directions[(i, j)].iter().rev() {
            self.pending.push(Branch {
                i,
                j,
                direction,
                depth,
            });
        }
    }
}

impl<T: Clone> Traceback<'_, T> {
    /// Replay the current path from the origin and copy out its symbols.
    fn materialize(&self) -> Alignment<T> {
        let mut columns = Vec::with_capacity(self.moves.len());
        let (mut i, mut j) = (0usize, 0usize);
        for direction in self.moves.iter().rev() {
            let column = match direction {
                Direction::Diagonal => {
                    let column = Column::Pair(self.first[i].clone(), self.second[j].clone());
                    i += 1;
                    j += 1;
                    column
                }
                Direction::Up => {
                    let column = Column::Deletion(self.first[i].clone());
                    i += 1;
                    column
                }
                Direction::Left => {
                    let column = Column::Insertion(self.second[j].clone());
                    j += 1;
                    column
                }
            };
            columns.push(column);
        }
        debug_assert_eq!((i, j), (self.first.len(), self.second.len()));
        Alignment::new(columns)
    }
}

impl<T: Clone> Iterator for Traceback<'_, T> {
    type Item = Alignment<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.empty_pending {
            self.empty_pending = false;
            return Some(Alignment::new(Vec::new()));
        }

        while let Some(branch) = self.pending.pop() {
            self.moves.truncate(branch.depth);
            self.moves.push(branch.direction);
            let (i, j) = branch.direction.predecessor(branch.i, branch.j);
            if i == 0 && j == 0 {
                return Some(self.materialize());
            }
            let depth = self.moves.len();
            self.push_branches(i, j, depth);
        }
        None
    }
}

impl<T: Clone> FusedIterator for Traceback<'_, T> {}

/// Number of optimal paths from `(m, n)` to the origin, saturating at `u64::MAX`.
///
/// Runs in `O(m * n)` regardless of how many paths exist, so it can be used
/// to refuse an enumeration before paying for it.
pub fn count_alignments(directions: &DirectionGrid) -> Result<u64> {
    let (rows, cols) = (directions.rows(), directions.cols());
    let mut counts = Grid::for_lengths(rows - 1, cols - 1, 0u64)?;
    counts[(0, 0)] = 1;
    for i in 0..rows {
        for j in 0..cols {
            if i == 0 && j == 0 {
                continue;
            }
            let set: DirectionSet = directions[(i, j)];
            let paths = set.iter().fold(0u64, |acc, direction| {
                acc.saturating_add(counts[direction.predecessor(i, j)])
            });
            counts[(i, j)] = paths;
        }
    }
    Ok(*counts.last())
}
