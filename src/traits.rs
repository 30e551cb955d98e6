//! The scoring seam between the alignment engine and a concrete scheme.
//!
//! The engine only ever asks two questions of a scheme: what a substitution
//! of one symbol for another is worth, and what a single gap costs. Linear gap
//! scoring is assumed throughout; the gap score does not depend on the
//! symbol facing the gap nor on the length of the gap run.

use crate::alignment::Column;

/// Pairwise cost function over symbols of type `T`.
pub trait ScoringScheme<T: ?Sized> {
    /// Score of aligning `a` against `b` (match or mismatch).
    fn substitution(&self, a: &T, b: &T) -> i32;

    /// Score of aligning any symbol against the gap placeholder.
    fn gap(&self) -> i32;

    /// Score of one alignment position, `None` standing for the gap.
    ///
    /// Exactly one gap scores [`gap`](Self::gap); two symbols score
    /// [`substitution`](Self::substitution). A gap facing a gap never occurs
    /// in an alignment and has no score: `None` is returned.
    fn score(&self, a: Option<&T>, b: Option<&T>) -> Option<i32> {
        match (a, b) {
            (Some(a), Some(b)) => Some(self.substitution(a, b)),
            (Some(_), None) | (None, Some(_)) => Some(self.gap()),
            (None, None) => None,
        }
    }

    /// Score of a single alignment column.
    fn score_column(&self, column: &Column<T>) -> i32
    where
        T: Sized,
    {
        match column {
            Column::Pair(a, b) => self.substitution(a, b),
            Column::Deletion(_) | Column::Insertion(_) => self.gap(),
        }
    }
}

impl<T: ?Sized, S: ScoringScheme<T> + ?Sized> ScoringScheme<T> for &S {
    #[inline]
    fn substitution(&self, a: &T, b: &T) -> i32 {
        (**self).substitution(a, b)
    }

    #[inline]
    fn gap(&self) -> i32 {
        (**self).gap()
    }
}
