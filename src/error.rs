//! Error type shared by the alignment engine and its tables.
//!
//! The dynamic program itself cannot fail. Every variant here describes a
//! capacity problem: the inputs are too large for the host, or the set of
//! optimal alignments is larger than the caller agreed to materialize.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AlignError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// `rows * cols` does not fit in `usize`.
    #[error("score matrix of {rows}x{cols} cells is not addressable")]
    MatrixTooLarge { rows: usize, cols: usize },

    /// The allocator refused to back the table.
    #[error("failed to allocate a table of {cells} cells")]
    Allocation { cells: usize },

    /// The score of some path could leave the `i32` range.
    #[error("scores for sequences of length {len_a} and {len_b} may overflow i32")]
    ScoreOverflow { len_a: usize, len_b: usize },

    /// More optimal alignments exist than the configured ceiling allows.
    ///
    /// `count` saturates at `u64::MAX`.
    #[error("{count} optimal alignments exceed the limit of {limit}")]
    TooManyAlignments { count: u64, limit: usize },
}
