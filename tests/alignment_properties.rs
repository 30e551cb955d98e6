use std::collections::HashSet;

use nw_all::{utils::alignment_length_bounds, Alignment, AlignmentEngine, LinearScoring};
use proptest::prelude::*;

proptest! {
    #[test]
    fn alignments_project_back_onto_inputs(a in "[ACGT]{0,9}", b in "[ACGT]{0,9}") {
        let engine = AlignmentEngine::new(1, -1, -1);
        let (a, b) = (a.as_bytes(), b.as_bytes());
        let result = engine.align(a, b).unwrap();
        prop_assert!(!result.alignments.is_empty());
        for alignment in &result.alignments {
            prop_assert_eq!(alignment.ungapped_first(), a.iter().collect::<Vec<_>>());
            prop_assert_eq!(alignment.ungapped_second(), b.iter().collect::<Vec<_>>());
        }
    }

    #[test]
    fn every_alignment_scores_the_optimum(
        a in "[ACGT]{0,9}",
        b in "[ACGT]{0,9}",
        ms in 0i32..4,
        mm in -4i32..1,
        gp in -4i32..0,
    ) {
        let scoring = LinearScoring::new(ms, mm, gp);
        let result = AlignmentEngine::with_scoring(scoring)
            .align(a.as_bytes(), b.as_bytes())
            .unwrap();
        prop_assert_eq!(result.score, *result.matrix.last());
        for alignment in &result.alignments {
            prop_assert_eq!(alignment.score(&scoring), result.score);
        }
    }

    #[test]
    fn alignment_length_is_bounded(a in "[ACGT]{0,12}", b in "[ACGT]{0,12}") {
        let result = AlignmentEngine::new(2, -1, -2)
            .align(a.as_bytes(), b.as_bytes())
            .unwrap();
        let (shortest, longest) = alignment_length_bounds(a.len(), b.len());
        for alignment in &result.alignments {
            prop_assert!(alignment.len() >= shortest);
            prop_assert!(alignment.len() <= longest);
            prop_assert_eq!(alignment.first_row().count(), alignment.second_row().count());
        }
    }

    #[test]
    fn repeated_calls_are_identical(a in "[AC]{0,8}", b in "[AC]{0,8}") {
        let engine = AlignmentEngine::new(1, -1, -1);
        let first = engine.align(a.as_bytes(), b.as_bytes()).unwrap();
        let second = engine.align(a.as_bytes(), b.as_bytes()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn swapping_inputs_transposes_the_set(a in "[ACG]{0,7}", b in "[ACG]{0,7}") {
        let engine = AlignmentEngine::new(1, -1, -1);
        let forward = engine.align(a.as_bytes(), b.as_bytes()).unwrap();
        let backward = engine.align(b.as_bytes(), a.as_bytes()).unwrap();
        prop_assert_eq!(forward.score, backward.score);

        let forward: HashSet<Alignment<u8>> = forward.alignments.into_iter().collect();
        let backward: HashSet<Alignment<u8>> = backward
            .alignments
            .into_iter()
            .map(Alignment::transpose)
            .collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn no_alignment_is_reported_twice(a in "[AT]{0,8}", b in "[AT]{0,8}") {
        let result = AlignmentEngine::new(1, -1, -1)
            .align(a.as_bytes(), b.as_bytes())
            .unwrap();
        let unique: HashSet<&Alignment<u8>> = result.alignments.iter().collect();
        prop_assert_eq!(unique.len(), result.alignments.len());
    }
}
