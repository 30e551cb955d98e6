//! Match / mismatch / gap scoring.

use crate::traits::ScoringScheme;

/// The three signed scores of a linear scheme.
///
/// No ordering between the values is enforced; `match >= mismatch` is the
/// usual setup but not required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinearScoring {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_score: i32,
}

impl LinearScoring {
    pub const fn new(match_score: i32, mismatch_score: i32, gap_score: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_score,
        }
    }

    /// The three scores as an array, in `[match, mismatch, gap]` order.
    pub const fn as_array(&self) -> [i32; 3] {
        [self.match_score, self.mismatch_score, self.gap_score]
    }
}

impl Default for LinearScoring {
    /// `+1` match, `-1` mismatch, `-2` gap.
    fn default() -> Self {
        Self::new(1, -1, -2)
    }
}

impl<T: PartialEq + ?Sized> ScoringScheme<T> for LinearScoring {
    #[inline]
    fn substitution(&self, a: &T, b: &T) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    #[inline]
    fn gap(&self) -> i32 {
        self.gap_score
    }
}
