//! Needleman–Wunsch engine that keeps every tie.
//!
//! Alignment runs in two phases:
//! 1. A forward pass fills the `(m+1) x (n+1)` score matrix and, for every
//!    cell, the set of moves whose candidate equals the cell's maximum.
//! 2. Traceback enumerates every path through those sets from `(m, n)` back
//!    to the origin, i.e. every alignment of optimal score.
//!
//! Both tables are built fresh per call and dropped when the call returns.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::alignment::Alignment;
use crate::direction::{Direction, DirectionSet};
use crate::error::{AlignError, Result};
use crate::matrix::{DirectionGrid, ScoreMatrix};
use crate::scoring::LinearScoring;
use crate::traceback::{count_alignments, Traceback};
use crate::traits::ScoringScheme;

/// Global aligner for a fixed scoring scheme `S`.
///
/// Typical usage:
/// ```
/// use nw_all::AlignmentEngine;
///
/// let engine = AlignmentEngine::new(1, -1, -1);
/// let a: Vec<char> = "GATTACA".chars().collect();
/// let b: Vec<char> = "GCATGCU".chars().collect();
/// let result = engine.align(&a, &b).unwrap();
/// assert_eq!(result.score, 0);
/// for alignment in &result.alignments {
///     println!("{alignment}\n");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AlignmentEngine<S = LinearScoring> {
    scoring: S,
    max_alignments: Option<usize>,
}

impl AlignmentEngine<LinearScoring> {
    /// Engine with linear match / mismatch / gap scores and no alignment ceiling.
    pub fn new(match_score: i32, mismatch_score: i32, gap_score: i32) -> Self {
        Self::with_scoring(LinearScoring::new(match_score, mismatch_score, gap_score))
    }
}

impl Default for AlignmentEngine<LinearScoring> {
    fn default() -> Self {
        Self::with_scoring(LinearScoring::default())
    }
}

impl<S> AlignmentEngine<S> {
    /// Engine over an arbitrary scheme, materializing every optimal alignment.
    pub fn with_scoring(scoring: S) -> Self {
        Self {
            scoring,
            max_alignments: None,
        }
    }

    /// Engine that refuses to materialize more than `limit` alignments.
    ///
    /// [`align`](Self::align) then fails with
    /// [`AlignError::TooManyAlignments`] rather than returning a partial set.
    pub fn with_max_alignments(scoring: S, limit: usize) -> Self {
        Self {
            scoring,
            max_alignments: Some(limit),
        }
    }

    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    pub fn max_alignments(&self) -> Option<usize> {
        self.max_alignments
    }

    /// Pairwise cost of one alignment position; `None` stands for the gap.
    ///
    /// Returns `None` only for a gap against a gap, which `align` never asks for.
    pub fn score<T: ?Sized>(&self, a: Option<&T>, b: Option<&T>) -> Option<i32>
    where
        S: ScoringScheme<T>,
    {
        self.scoring.score(a, b)
    }

    /// Phase I: build the score matrix and the direction table.
    ///
    /// Fails if the tables cannot be allocated or a cell's optimal score
    /// leaves the `i32` range. Losing candidates may lie outside it.
    pub fn fill<'s, T>(&self, first: &'s [T], second: &'s [T]) -> Result<DpTables<'s, T>>
    where
        S: ScoringScheme<T>,
    {
        let (m, n) = (first.len(), second.len());
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("nw_fill", m, n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut scores = ScoreMatrix::for_lengths(m, n, 0)?;
        let mut directions = DirectionGrid::for_lengths(m, n, DirectionSet::EMPTY)?;
        let overflow = || AlignError::ScoreOverflow { len_a: m, len_b: n };
        let gap = i64::from(self.scoring.gap());

        // Candidates are compared in i64; only a cell's winning value must fit in i32.
        // Borders have a single predecessor each, so no ties are possible there.
        for i in 1..=m {
            let value = i64::from(scores[(i - 1, 0)]) + gap;
            scores[(i, 0)] = i32::try_from(value).map_err(|_| overflow())?;
            directions[(i, 0)] = DirectionSet::single(Direction::Up);
        }
        for j in 1..=n {
            let value = i64::from(scores[(0, j - 1)]) + gap;
            scores[(0, j)] = i32::try_from(value).map_err(|_| overflow())?;
            directions[(0, j)] = DirectionSet::single(Direction::Left);
        }

        for i in 1..=m {
            let a = &first[i - 1];
            for j in 1..=n {
                let substitution = i64::from(self.scoring.substitution(a, &second[j - 1]));
                let diag = i64::from(scores[(i - 1, j - 1)]) + substitution;
                let up = i64::from(scores[(i - 1, j)]) + gap;
                let left = i64::from(scores[(i, j - 1)]) + gap;
                let best = diag.max(up).max(left);
                let candidates = [
                    (Direction::Diagonal, diag),
                    (Direction::Up, up),
                    (Direction::Left, left),
                ];
                scores[(i, j)] = i32::try_from(best).map_err(|_| overflow())?;
                directions[(i, j)] = candidates
                    .iter()
                    .filter(|(_, value)| *value == best)
                    .map(|(direction, _)| *direction)
                    .collect();
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            score = *scores.last(),
            tied_cells = directions.iter_rows().flatten().filter(|d| d.is_tie()).count(),
            "score matrix filled"
        );

        Ok(DpTables {
            first,
            second,
            scores,
            directions,
        })
    }

    /// Align `first` against `second` and enumerate every optimal alignment.
    ///
    /// The number of optimal alignments can grow exponentially with the input
    /// length on highly repetitive sequences; configure a ceiling with
    /// [`with_max_alignments`](Self::with_max_alignments) when inputs are not
    /// trusted.
    pub fn align<T: Clone>(&self, first: &[T], second: &[T]) -> Result<AlignmentResult<T>>
    where
        S: ScoringScheme<T>,
    {
        let tables = self.fill(first, second)?;

        if let Some(limit) = self.max_alignments {
            let count = tables.count_alignments()?;
            if count > limit as u64 {
                #[cfg(feature = "tracing")]
                tracing::debug!(count, limit, "refusing to enumerate optimal alignments");
                return Err(AlignError::TooManyAlignments { count, limit });
            }
        }

        let alignments: Vec<Alignment<T>> = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("nw_traceback", m = first.len(), n = second.len());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            tables.alignments().collect()
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(alignments = alignments.len(), "traceback complete");

        let score = tables.optimal_score();
        Ok(AlignmentResult {
            matrix: tables.into_score_matrix(),
            alignments,
            score,
        })
    }
}

#[cfg(feature = "parallel")]
impl<S: Sync> AlignmentEngine<S> {
    /// Align independent pairs on the rayon pool, preserving input order.
    ///
    /// Each pair gets its own tables; a failing pair does not affect the others.
    pub fn align_many<T>(&self, pairs: &[(&[T], &[T])]) -> Vec<Result<AlignmentResult<T>>>
    where
        S: ScoringScheme<T>,
        T: Clone + Send + Sync,
    {
        pairs
            .par_iter()
            .map(|(first, second)| self.align(first, second))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
impl<S> AlignmentEngine<S> {
    /// Align independent pairs in order.
    ///
    /// Each pair gets its own tables; a failing pair does not affect the others.
    pub fn align_many<T>(&self, pairs: &[(&[T], &[T])]) -> Vec<Result<AlignmentResult<T>>>
    where
        S: ScoringScheme<T>,
        T: Clone,
    {
        pairs
            .iter()
            .map(|(first, second)| self.align(first, second))
            .collect()
    }
}

/// Filled score matrix and direction table for one pair of sequences.
#[derive(Debug, Clone)]
pub struct DpTables<'s, T> {
    first: &'s [T],
    second: &'s [T],
    scores: ScoreMatrix,
    directions: DirectionGrid,
}

impl<'s, T> DpTables<'s, T> {
    pub fn scores(&self) -> &ScoreMatrix {
        &self.scores
    }

    pub fn directions(&self) -> &DirectionGrid {
        &self.directions
    }

    /// Bottom-right cell of the score matrix.
    pub fn optimal_score(&self) -> i32 {
        *self.scores.last()
    }

    /// Phase II: lazy enumeration of every optimal alignment.
    pub fn alignments(&self) -> Traceback<'_, T> {
        Traceback::new(self.first, self.second, &self.directions)
    }

    /// Number of optimal alignments, saturating at `u64::MAX`.
    pub fn count_alignments(&self) -> Result<u64> {
        count_alignments(&self.directions)
    }

    pub fn into_score_matrix(self) -> ScoreMatrix {
        self.scores
    }
}

/// Everything one alignment call produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult<T> {
    /// `(m+1) x (n+1)` optimal prefix scores.
    pub matrix: ScoreMatrix,
    /// Every optimal alignment, without duplicates.
    pub alignments: Vec<Alignment<T>>,
    /// Optimal global score; equals the bottom-right matrix cell.
    pub score: i32,
}

impl<T> AlignmentResult<T> {
    pub fn into_parts(self) -> (ScoreMatrix, Vec<Alignment<T>>, i32) {
        (self.matrix, self.alignments, self.score)
    }
}
