use std::env;
use std::process;
use std::str::FromStr;

use nw_all::{AlignmentEngineBuilder, AlignmentResult, ScoreMatrix};

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("nw_align: {err}");
            Options::print_help();
            process::exit(2);
        }
    };
    log::debug!(
        "match={} mismatch={} gap={} max_alignments={:?}",
        options.match_score,
        options.mismatch_score,
        options.gap_score,
        options.max_alignments
    );

    let first = options.symbols(&options.first);
    let second = options.symbols(&options.second);

    let mut builder = AlignmentEngineBuilder::new()
        .with_match_score(options.match_score)
        .with_mismatch_score(options.mismatch_score)
        .with_gap_score(options.gap_score);
    if let Some(limit) = options.max_alignments {
        builder = builder.with_max_alignments(limit);
    }
    let engine = builder.build();

    let result = match engine.align(&first, &second) {
        Ok(result) => result,
        Err(err) => {
            log::error!("alignment failed: {err}");
            eprintln!("nw_align: {err}");
            process::exit(1);
        }
    };
    log::info!(
        "{} optimal alignment(s) with score {}",
        result.alignments.len(),
        result.score
    );

    match options.format {
        OutputFormat::Table => write_table(&first, &second, &result),
        OutputFormat::Csv => write_csv(&result),
        OutputFormat::Json => write_json(&result),
    }
}

struct Options {
    match_score: i32,
    mismatch_score: i32,
    gap_score: i32,
    max_alignments: Option<usize>,
    format: OutputFormat,
    tokens: bool,
    first: String,
    second: String,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut match_score = 1;
        let mut mismatch_score = -1;
        let mut gap_score = -2;
        let mut max_alignments = None;
        let mut format = OutputFormat::Table;
        let mut tokens = false;
        let mut positional = Vec::new();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
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
                "--match" => match_score = parse_number("--match", &value()?)?,
                "--mismatch" => mismatch_score = parse_number("--mismatch", &value()?)?,
                "--gap" => gap_score = parse_number("--gap", &value()?)?,
                "--max-alignments" => {
                    max_alignments = Some(parse_number("--max-alignments", &value()?)?)
                }
                "--format" => format = OutputFormat::from_str(&value()?)?,
                "--tokens" => tokens = true,
                other if other.starts_with("--") => {
                    return Err(format!("unrecognized argument '{other}'"));
                }
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let (first, second) = match (positional.next(), positional.next(), positional.next()) {
            (Some(first), Some(second), None) => (first, second),
            (_, _, Some(extra)) => return Err(format!("unexpected argument '{extra}'")),
            _ => return Err("expected two sequences".to_string()),
        };

        Ok(Self {
            match_score,
            mismatch_score,
            gap_score,
            max_alignments,
            format,
            tokens,
            first,
            second,
        })
    }

    /// Split an input into symbols: whitespace-separated tokens or single characters.
    fn symbols(&self, input: &str) -> Vec<String> {
        if self.tokens {
            input.split_whitespace().map(str::to_string).collect()
        } else {
            input.chars().map(String::from).collect()
        }
    }

    fn print_help() {
        println!(
            "\
Usage: nw_align [options] <A> <B>

Aligns A against B and prints every optimal global alignment.

Options:
  --match <N>                   Score of two equal symbols (default: 1)
  --mismatch <N>                Score of two different symbols (default: -1)
  --gap <N>                     Score of a symbol against a gap (default: -2)
  --max-alignments <N>          Fail instead of printing more than N alignments
  --format <table|csv|json>     Output format (default: table)
  --tokens                      Treat whitespace-separated words as symbols
  -h, --help                    Print this help message

Examples:
  nw_align GATTACA GCATGCU
  nw_align --gap -1 --format json AC CA
  nw_align --tokens 'the cat sat' 'the hat sat'
"
        );
    }
}

fn parse_number<N: FromStr>(flag: &str, value: &str) -> Result<N, String> {
    value
        .parse::<N>()
        .map_err(|_| format!("{flag} expects an integer, got '{value}'"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

fn write_table(first: &[String], second: &[String], result: &AlignmentResult<String>) {
    println!("Score matrix:");
    print!("{}", labelled_matrix(first, second, &result.matrix));
    println!();
    println!("Optimal global alignments:");
    for (idx, alignment) in result.alignments.iter().enumerate() {
        let (top, bottom) = alignment.rows('-');
        println!("#{idx}:");
        println!("  {top}");
        println!("  {bottom}");
    }
    println!("Final score: {}", result.score);
}

/// Score matrix with the sequences along the margins, `-` marking the empty prefix.
fn labelled_matrix(first: &[String], second: &[String], matrix: &ScoreMatrix) -> String {
    let row_labels: Vec<&str> = std::iter::once("-")
        .chain(first.iter().map(String::as_str))
        .collect();
    let col_labels: Vec<&str> = std::iter::once("-")
        .chain(second.iter().map(String::as_str))
        .collect();

    let label_width = row_labels.iter().map(|s| s.chars().count()).max().unwrap_or(1);
    let cell_width = matrix
        .iter_rows()
        .flatten()
        .map(|v| v.to_string().len())
        .chain(col_labels.iter().map(|s| s.chars().count()))
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    out.push_str(&format!("{:label_width$}", ""));
    for label in &col_labels {
        out.push_str(&format!(" {label:>cell_width$}"));
    }
    out.push('\n');
    for (row, label) in matrix.iter_rows().zip(&row_labels) {
        out.push_str(&format!("{label:label_width$}"));
        for value in row {
            out.push_str(&format!(" {value:>cell_width$}"));
        }
        out.push('\n');
    }
    out
}

fn write_csv(result: &AlignmentResult<String>) {
    println!("index,first,second,score");
    for (idx, alignment) in result.alignments.iter().enumerate() {
        let (top, bottom) = alignment.rows('-');
        println!(
            "{idx},\"{}\",\"{}\",{}",
            top.replace('"', "\"\""),
            bottom.replace('"', "\"\""),
            result.score
        );
    }
}

fn write_json(result: &AlignmentResult<String>) {
    let matrix: Vec<String> = result
        .matrix
        .iter_rows()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            format!("[{}]", cells.join(","))
        })
        .collect();
    let alignments: Vec<String> = result
        .alignments
        .iter()
        .map(|alignment| {
            let (top, bottom) = alignment.rows('-');
            format!(
                "{{\"first\":\"{}\",\"second\":\"{}\"}}",
                json_escape(&top),
                json_escape(&bottom)
            )
        })
        .collect();
    println!(
        "{{\"score\":{},\"matrix\":[{}],\"alignments\":[{}]}}",
        result.score,
        matrix.join(","),
        alignments.join(",")
    );
}

fn json_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
