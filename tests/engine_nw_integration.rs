use nw_all::{Alignment, AlignmentEngine, Column, LinearScoring};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn rendered(alignments: &[Alignment<char>]) -> Vec<(String, String)> {
    alignments.iter().map(|a| a.rows('-')).collect()
}

#[test]
fn gattaca_example() {
    // Textbook parameters: +1 match, -1 mismatch, -1 gap.
    let scoring = LinearScoring::new(1, -1, -1);
    let engine = AlignmentEngine::with_scoring(scoring);
    let a = chars("GATTACA");
    let b = chars("GCATGCU");
    let (matrix, alignments, score) = engine.align(&a, &b).unwrap().into_parts();

    assert_eq!(score, 0);
    assert_eq!(*matrix.last(), score);
    assert!(!alignments.is_empty());
    for alignment in &alignments {
        assert!(
            alignment.len() == 8 || alignment.len() == 9,
            "unexpected length {}",
            alignment.len()
        );
        assert_eq!(alignment.score(&scoring), 0);
        assert_eq!(alignment.ungapped_first(), a.iter().collect::<Vec<_>>());
        assert_eq!(alignment.ungapped_second(), b.iter().collect::<Vec<_>>());
    }
}

#[test]
fn gattaca_enumerates_all_three_optima() {
    let engine = AlignmentEngine::new(1, -1, -1);
    let result = engine.align(&chars("GATTACA"), &chars("GCATGCU")).unwrap();
    let mut rows = rendered(&result.alignments);
    rows.sort();
    let expected: Vec<(String, String)> = [
        ("G-ATTACA", "GCA-TGCU"),
        ("G-ATTACA", "GCAT-GCU"),
        ("G-ATTACA", "GCATG-CU"),
    ]
    .iter()
    .map(|(a, b)| (a.to_string(), b.to_string()))
    .collect();
    assert_eq!(rows, expected);
}

#[test]
fn gattaca_with_costly_gaps_prefers_substitutions() {
    let engine = AlignmentEngine::new(1, -1, -2);
    let result = engine.align(&chars("GATTACA"), &chars("GCATGCU")).unwrap();
    assert_eq!(result.score, -1);
    assert_eq!(
        rendered(&result.alignments),
        vec![("GATTACA".to_string(), "GCATGCU".to_string())]
    );
}

#[test]
fn reference_driver_pairs() {
    let engine = AlignmentEngine::new(1, -1, -2);

    let result = engine.align(&chars("ACGT"), &chars("ACCT")).unwrap();
    assert_eq!(result.score, 2);
    assert_eq!(
        rendered(&result.alignments),
        vec![("ACGT".to_string(), "ACCT".to_string())]
    );

    let result = engine.align(&chars("ATGCT"), &chars("AGCT")).unwrap();
    assert_eq!(result.score, 2);
    assert_eq!(
        rendered(&result.alignments),
        vec![("ATGCT".to_string(), "A-GCT".to_string())]
    );
}

#[test]
fn both_empty() {
    let engine = AlignmentEngine::new(1, -1, -2);
    let empty: &[u8] = &[];
    let result = engine.align(empty, empty).unwrap();
    assert_eq!(result.matrix.rows(), 1);
    assert_eq!(result.matrix.cols(), 1);
    assert_eq!(*result.matrix.last(), 0);
    assert_eq!(result.alignments, vec![Alignment::new(Vec::new())]);
    assert_eq!(result.score, 0);
}

#[test]
fn one_side_empty() {
    let engine = AlignmentEngine::new(1, -1, -3);
    let result = engine.align(&chars("A"), &[]).unwrap();
    assert_eq!(result.score, -3);
    assert_eq!(
        rendered(&result.alignments),
        vec![("A".to_string(), "-".to_string())]
    );

    let result = engine.align(&[], &chars("XYZ")).unwrap();
    assert_eq!(result.score, -9);
    assert_eq!(result.matrix.rows(), 1);
    assert_eq!(result.matrix.row(0), &[0, -3, -6, -9]);
    assert_eq!(
        result.alignments,
        vec![Alignment::new(vec![
            Column::Insertion('X'),
            Column::Insertion('Y'),
            Column::Insertion('Z'),
        ])]
    );
}

#[test]
fn identical_sequences_align_without_gaps() {
    let engine = AlignmentEngine::new(1, -1, -2);
    let s = chars("HELLO");
    let result = engine.align(&s, &s).unwrap();
    assert_eq!(result.score, 5);
    assert_eq!(result.alignments.len(), 1);
    assert!(result.alignments[0]
        .columns()
        .iter()
        .all(|c| matches!(c, Column::Pair(a, b) if a == b)));
}

#[test]
fn tokens_are_symbols() {
    let engine = AlignmentEngine::new(2, -1, -1);
    let a = ["the", "cat", "sat"];
    let b = ["the", "sat"];
    let result = engine.align(&a, &b).unwrap();
    assert_eq!(result.score, 3);
    assert_eq!(result.alignments.len(), 1);
    let (top, bottom) = result.alignments[0].rows('-');
    assert_eq!(top, "thecatsat");
    assert_eq!(bottom, "the---sat");
}

#[test]
fn appending_identical_symbol_adds_match_score() {
    let engine = AlignmentEngine::new(1, -1, -2);
    let base = engine
        .align(&chars("GATTACA"), &chars("GCATGCU"))
        .unwrap()
        .score;
    let extended = engine
        .align(&chars("GATTACAG"), &chars("GCATGCUG"))
        .unwrap()
        .score;
    assert!(extended >= base + 1);
}
