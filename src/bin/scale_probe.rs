//! Timing and resident-memory probe for the fill, enumeration and counting
//! phases over growing inputs.
//!
//! Every sample is checked: fills against a score-only baseline (up to
//! `--verify-limit`), enumeration and counting against the known `n(n-1)/2`
//! optimal alignments of `A^n` versus `A^(n-2)`.

use std::env;
use std::process;
use std::time::Instant;

use nw_all::{AlignmentEngine, LinearScoring, Result as AlignResult};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const SCORING: LinearScoring = LinearScoring::new(2, -1, -2);

const FILL_LENGTHS: &[usize] = &[128, 256, 512, 1024, 2048, 4096];
const ENUMERATE_LENGTHS: &[usize] = &[16, 32, 64, 128, 256];
const COUNT_LENGTHS: &[usize] = &[256, 1024, 2048];

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            process::exit(2);
        }
    };

    let engine = AlignmentEngine::with_scoring(SCORING);
    let mut probe = Probe::new();

    for &len in FILL_LENGTHS {
        probe.sample(Phase::Fill, len, || fill(&engine, len, options.verify_limit));
    }
    for &len in ENUMERATE_LENGTHS {
        probe.sample(Phase::Enumerate, len, || {
            enumerate(&engine, len, options.verify_limit)
        });
    }
    for &len in COUNT_LENGTHS {
        probe.sample(Phase::Count, len, || count(&engine, len));
    }

    let failed = probe
        .samples
        .iter()
        .filter(|s| s.outcome.is_failure())
        .count();
    log::info!(
        "{} samples, {} failed, verify limit {}",
        probe.samples.len(),
        failed,
        options.verify_limit
    );

    match options.format {
        Format::Csv => write_csv(&probe.samples),
        Format::Table => write_table(&probe.samples),
        Format::Json => write_json(&probe.samples),
    }
    if failed > 0 {
        process::exit(1);
    }
}

struct Options {
    format: Format,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = Format::Csv;
        let mut verify_limit = 512usize;

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg.clone(), None),
            };
            let mut value = || -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {flag}")),
                }
            };

            match flag.as_str() {
                "-h" | "--help" => {
                    Options::print_help();
                    process::exit(0);
                }
                "--format" => format = Format::parse(&value()?)?,
                "--verify-limit" => {
                    verify_limit = value()?
                        .parse()
                        .map_err(|_| "--verify-limit expects a non-negative integer".to_string())?
                }
                other => return Err(format!("unrecognized argument '{other}'")),
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: scale_probe [options]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Longest input checked against the baseline (default: 512)
  -h, --help                    Print this help message

Set RUST_LOG=info to follow progress on stderr.
"
        );
    }
}

#[derive(Copy, Clone)]
enum Format {
    Csv,
    Table,
    Json,
}

impl Format {
    fn parse(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

#[derive(Copy, Clone)]
enum Phase {
    Fill,
    Enumerate,
    Count,
}

impl Phase {
    fn name(self) -> &'static str {
        match self {
            Phase::Fill => "fill",
            Phase::Enumerate => "enumerate",
            Phase::Count => "count",
        }
    }
}

/// What a sample computed, and whether it was checked.
enum Outcome {
    Verified(String),
    Unverified(String),
    Failed(String),
}

impl Outcome {
    fn status(&self) -> &'static str {
        match self {
            Outcome::Verified(_) => "verified",
            Outcome::Unverified(_) => "unverified",
            Outcome::Failed(_) => "failed",
        }
    }

    fn detail(&self) -> &str {
        match self {
            Outcome::Verified(d) | Outcome::Unverified(d) | Outcome::Failed(d) => d,
        }
    }

    fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

struct Sample {
    phase: Phase,
    len: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    outcome: Outcome,
}

struct Probe {
    sys: System,
    samples: Vec<Sample>,
}

impl Probe {
    fn new() -> Self {
        Self {
            sys: System::new(),
            samples: Vec::new(),
        }
    }

    fn sample<F>(&mut self, phase: Phase, len: usize, run: F)
    where
        F: FnOnce() -> AlignResult<Outcome>,
    {
        let before = self.rss_kib();
        let start = Instant::now();
        let outcome = run().unwrap_or_else(|err| Outcome::Failed(err.to_string()));
        let wall_s = start.elapsed().as_secs_f64();
        let rss_delta_kib = self.rss_kib().saturating_sub(before);

        if outcome.is_failure() {
            log::error!("{} len={len}: {}", phase.name(), outcome.detail());
        } else {
            log::info!(
                "{} len={len}: {} in {wall_s:.3}s ({})",
                phase.name(),
                outcome.detail(),
                outcome.status()
            );
        }
        self.samples.push(Sample {
            phase,
            len,
            wall_s,
            rss_delta_kib,
            outcome,
        });
    }

    fn rss_kib(&mut self) -> u64 {
        self.sys
            .refresh_processes_specifics(ProcessRefreshKind::new());
        get_current_pid()
            .ok()
            .and_then(|pid| self.sys.process(pid))
            .map_or(0, |process| process.memory() / 1024)
    }
}

fn fill(engine: &AlignmentEngine, len: usize, verify_limit: usize) -> AlignResult<Outcome> {
    let a = periodic_dna(len, 0);
    let b = periodic_dna(len, 2);
    let score = engine.fill(&a, &b)?.optimal_score();
    let detail = format!("score={score}");
    if len > verify_limit {
        return Ok(Outcome::Unverified(detail));
    }
    let baseline = baseline_score(&a, &b);
    Ok(if baseline == score {
        Outcome::Verified(detail)
    } else {
        Outcome::Failed(format!("score {score}, baseline {baseline}"))
    })
}

/// `A^len` against `A^(len-2)`: the two unmatched symbols may sit anywhere.
fn homopolymer_pair(len: usize) -> (Vec<u8>, Vec<u8>, u64) {
    let expected = (len * (len - 1) / 2) as u64;
    (vec![b'A'; len], vec![b'A'; len - 2], expected)
}

fn enumerate(engine: &AlignmentEngine, len: usize, verify_limit: usize) -> AlignResult<Outcome> {
    let (a, b, expected) = homopolymer_pair(len);
    let tables = engine.fill(&a, &b)?;
    let optimal = tables.optimal_score();
    let check_scores = len <= verify_limit;

    let mut seen = 0u64;
    let mut off_score = 0u64;
    for alignment in tables.alignments() {
        seen += 1;
        if check_scores && alignment.score(&SCORING) != optimal {
            off_score += 1;
        }
    }

    Ok(if seen != expected {
        Outcome::Failed(format!("{seen} alignments, expected {expected}"))
    } else if off_score > 0 {
        Outcome::Failed(format!("{off_score} alignments off the optimal score"))
    } else {
        Outcome::Verified(format!("alignments={seen}"))
    })
}

fn count(engine: &AlignmentEngine, len: usize) -> AlignResult<Outcome> {
    let (a, b, expected) = homopolymer_pair(len);
    let paths = engine.fill(&a, &b)?.count_alignments()?;
    Ok(if paths == expected {
        Outcome::Verified(format!("paths={paths}"))
    } else {
        Outcome::Failed(format!("{paths} paths, expected {expected}"))
    })
}

fn write_csv(samples: &[Sample]) {
    println!("phase,len,wall_s,rss_delta_kib,status,detail");
    for s in samples {
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            s.phase.name(),
            s.len,
            s.wall_s,
            s.rss_delta_kib,
            s.outcome.status(),
            s.outcome.detail().replace('"', "\"\"")
        );
    }
}

fn write_table(samples: &[Sample]) {
    println!(
        "{:<10} {:>6} {:>10} {:>14} {:>11}  detail",
        "phase", "len", "wall_s", "rss_delta_kib", "status"
    );
    for s in samples {
        println!(
            "{:<10} {:>6} {:>10.3} {:>14} {:>11}  {}",
            s.phase.name(),
            s.len,
            s.wall_s,
            s.rss_delta_kib,
            s.outcome.status(),
            s.outcome.detail()
        );
    }
}

fn write_json(samples: &[Sample]) {
    let rows: Vec<String> = samples
        .iter()
        .map(|s| {
            format!(
                "{{\"phase\":\"{}\",\"len\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"status\":\"{}\",\"detail\":\"{}\"}}",
                s.phase.name(),
                s.len,
                s.wall_s,
                s.rss_delta_kib,
                s.outcome.status(),
                s.outcome.detail().replace('\\', "\\\\").replace('"', "\\\"")
            )
        })
        .collect();
    println!("[{}]", rows.join(","));
}

fn periodic_dna(len: usize, offset: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i + offset) % ALPHABET.len()])
        .collect()
}

/// Score-only two-row baseline, independent of the engine.
fn baseline_score(a: &[u8], b: &[u8]) -> i32 {
    let gap = SCORING.gap_score;
    let mut prev: Vec<i32> = (0..=b.len() as i32).map(|j| j * gap).collect();
    let mut curr = vec![0i32; b.len() + 1];
    for (i, x) in a.iter().enumerate() {
        curr[0] = (i as i32 + 1) * gap;
        for (j, y) in b.iter().enumerate() {
            let sub = if x == y {
                SCORING.match_score
            } else {
                SCORING.mismatch_score
            };
            curr[j + 1] = (prev[j] + sub).max(prev[j + 1] + gap).max(curr[j] + gap);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
