use crate::scoring::LinearScoring;
use crate::AlignmentEngine;

/// Fluent configuration for an [`AlignmentEngine`] with linear scoring.
///
/// Unset scores fall back to [`LinearScoring::default`].
#[derive(Debug, Clone, Default)]
pub struct AlignmentEngineBuilder {
    scoring: LinearScoring,
    max_alignments: Option<usize>,
}

impl AlignmentEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_match_score(mut self, score: i32) -> Self {
        self.scoring.match_score = score;
        self
    }
    pub fn with_mismatch_score(mut self, score: i32) -> Self {
        self.scoring.mismatch_score = score;
        self
    }
    pub fn with_gap_score(mut self, score: i32) -> Self {
        self.scoring.gap_score = score;
        self
    }
    pub fn with_scoring(mut self, scoring: LinearScoring) -> Self {
        self.scoring = scoring;
        self
    }
    pub fn with_max_alignments(mut self, limit: usize) -> Self {
        self.max_alignments = Some(limit);
        self
    }
    pub fn build(self) -> AlignmentEngine<LinearScoring> {
        match self.max_alignments {
            Some(limit) => AlignmentEngine::with_max_alignments(self.scoring, limit),
            None => AlignmentEngine::with_scoring(self.scoring),
        }
    }
}
