//! Example: every optimal global alignment for a few classic pairs.
//!
//! Run with:
//! `cargo run --example align`

use nw_all::AlignmentEngine;

fn main() {
    // +1 match, -1 mismatch, -2 gap.
    let engine = AlignmentEngine::new(1, -1, -2);
    let pairs = [("GATTACA", "GCATGCU"), ("ACGT", "ACCT"), ("ATGCT", "AGCT")];

    for (a, b) in pairs {
        let seq_a: Vec<char> = a.chars().collect();
        let seq_b: Vec<char> = b.chars().collect();
        let result = match engine.align(&seq_a, &seq_b) {
            Ok(result) => result,
            Err(err) => {
                eprintln!("{a} vs {b}: {err}");
                continue;
            }
        };

        println!("Alignment for {a} and {b}:");
        println!("Score matrix:");
        print!("{}", result.matrix);
        println!("Optimal global alignments:");
        for (idx, alignment) in result.alignments.iter().enumerate() {
            let (top, bottom) = alignment.rows('-');
            println!("#{idx}: ({top}, {bottom})");
        }
        println!("Final score: {}", result.score);
        println!();
    }
}
