use std::collections::HashSet;

use nw_all::{AlignmentEngine, LinearScoring};
use proptest::prelude::*;

fn full_nw(s: &[u8], t: &[u8], ms: i32, mm: i32, gp: i32) -> i32 {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0i32; m + 1]; n + 1];
    for i in 1..=n {
        dp[i][0] = dp[i - 1][0] + gp;
    }
    for j in 1..=m {
        dp[0][j] = dp[0][j - 1] + gp;
    }
    for i in 1..=n {
        for j in 1..=m {
            let score = if s[i - 1] == t[j - 1] { ms } else { mm };
            let diag = dp[i - 1][j - 1] + score;
            let up = dp[i - 1][j] + gp;
            let left = dp[i][j - 1] + gp;
            dp[i][j] = diag.max(up).max(left);
        }
    }
    dp[n][m]
}

/// Every global alignment of `s` and `t` as a pair of gapped rows.
fn all_alignments(s: &[u8], t: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
    if s.is_empty() && t.is_empty() {
        return vec![(Vec::new(), Vec::new())];
    }
    let mut out = Vec::new();
    if !s.is_empty() && !t.is_empty() {
        for (mut a, mut b) in all_alignments(&s[1..], &t[1..]) {
            a.insert(0, s[0]);
            b.insert(0, t[0]);
            out.push((a, b));
        }
    }
    if !s.is_empty() {
        for (mut a, mut b) in all_alignments(&s[1..], t) {
            a.insert(0, s[0]);
            b.insert(0, b'-');
            out.push((a, b));
        }
    }
    if !t.is_empty() {
        for (mut a, mut b) in all_alignments(s, &t[1..]) {
            a.insert(0, b'-');
            b.insert(0, t[0]);
            out.push((a, b));
        }
    }
    out
}

fn row_score(a: &[u8], b: &[u8], ms: i32, mm: i32, gp: i32) -> i32 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| match (x, y) {
            (b'-', _) | (_, b'-') => gp,
            (x, y) if x == y => ms,
            _ => mm,
        })
        .sum()
}

proptest! {
    #[test]
    fn score_matches_full_dp(
        a in "[ACGT]{0,24}",
        b in "[ACGT]{0,24}",
        ms in 0i32..5,
        mm in -5i32..2,
        gp in -5i32..0,
    ) {
        let engine = AlignmentEngine::new(ms, mm, gp);
        let tables = engine.fill(a.as_bytes(), b.as_bytes()).unwrap();
        prop_assert_eq!(
            tables.optimal_score(),
            full_nw(a.as_bytes(), b.as_bytes(), ms, mm, gp)
        );
    }

    #[test]
    fn enumeration_matches_brute_force(
        a in "[ACG]{0,5}",
        b in "[ACG]{0,5}",
        ms in 0i32..3,
        mm in -3i32..1,
        gp in -3i32..0,
    ) {
        let (a, b) = (a.as_bytes(), b.as_bytes());
        let candidates = all_alignments(a, b);
        let best = candidates
            .iter()
            .map(|(x, y)| row_score(x, y, ms, mm, gp))
            .max()
            .unwrap();
        let expected: HashSet<(Vec<u8>, Vec<u8>)> = candidates
            .into_iter()
            .filter(|(x, y)| row_score(x, y, ms, mm, gp) == best)
            .collect();

        let engine = AlignmentEngine::with_scoring(LinearScoring::new(ms, mm, gp));
        let result = engine.align(a, b).unwrap();
        prop_assert_eq!(result.score, best);

        let produced: Vec<(Vec<u8>, Vec<u8>)> = result
            .alignments
            .iter()
            .map(|alignment| {
                let top = alignment.first_row().map(|c| c.copied().unwrap_or(b'-')).collect();
                let bottom = alignment.second_row().map(|c| c.copied().unwrap_or(b'-')).collect();
                (top, bottom)
            })
            .collect();
        prop_assert_eq!(produced.len(), expected.len());
        let produced: HashSet<_> = produced.into_iter().collect();
        prop_assert_eq!(produced, expected);
    }
}
