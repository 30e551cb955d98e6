//! Dense row-major tables for the score matrix and the direction table.
//!
//! Every cell in `(m+1) x (n+1)` is populated, so a flat `Vec` indexed by
//! `i * cols + j` is used rather than an associative map.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::direction::DirectionSet;
use crate::error::{AlignError, Result};
use crate::utils::checked_cell_count;

/// `rows x cols` table stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<V> {
    rows: usize,
    cols: usize,
    cells: Vec<V>,
}

/// Optimal prefix scores: cell `(i, j)` scores `A[..i]` against `B[..j]`.
pub type ScoreMatrix = Grid<i32>;

/// Tied optimal moves into each cell.
pub type DirectionGrid = Grid<DirectionSet>;

impl<V: Clone> Grid<V> {
    /// Table sized for sequences of lengths `len_a` and `len_b`, filled with `fill`.
    ///
    /// Fails instead of aborting when the size overflows or the allocator
    /// cannot back the table.
    pub fn for_lengths(len_a: usize, len_b: usize, fill: V) -> Result<Self> {
        let cells = checked_cell_count(len_a, len_b).ok_or(AlignError::MatrixTooLarge {
            rows: len_a.saturating_add(1),
            cols: len_b.saturating_add(1),
        })?;
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(cells)
            .map_err(|_| AlignError::Allocation { cells })?;
        storage.resize(cells, fill);
        Ok(Self {
            rows: len_a + 1,
            cols: len_b + 1,
            cells: storage,
        })
    }
}

impl<V> Grid<V> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<&V> {
        if i < self.rows && j < self.cols {
            self.cells.get(i * self.cols + j)
        } else {
            None
        }
    }

    /// Cells of row `i`. Panics if `i` is out of range.
    #[inline]
    pub fn row(&self, i: usize) -> &[V] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[V]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Bottom-right cell. A grid always has at least one cell.
    #[inline]
    pub fn last(&self) -> &V {
        &self.cells[self.cells.len() - 1]
    }
}

impl<V> Index<(usize, usize)> for Grid<V> {
    type Output = V;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &V {
        debug_assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        &self.cells[i * self.cols + j]
    }
}

impl<V> IndexMut<(usize, usize)> for Grid<V> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut V {
        debug_assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        &mut self.cells[i * self.cols + j]
    }
}

impl<V: fmt::Display> fmt::Display for Grid<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.cells.iter().map(ToString::to_string).collect();
        let width = rendered.iter().map(String::len).max().unwrap_or(1);
        for row in rendered.chunks(self.cols.max(1)) {
            let line: Vec<String> = row.iter().map(|c| format!("{c:>width$}")).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
