//! Gapped alignments produced by traceback.
//!
//! An [`Alignment`] is stored column by column, which keeps its two rows the
//! same length by construction and makes a gap facing a gap unrepresentable.

use std::fmt;

use crate::direction::Direction;
use crate::traits::ScoringScheme;

/// One position of a pairwise alignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Column<T> {
    /// A symbol of the first sequence against a symbol of the second.
    Pair(T, T),
    /// A symbol of the first sequence against a gap.
    Deletion(T),
    /// A gap against a symbol of the second sequence.
    Insertion(T),
}

impl<T> Column<T> {
    /// Symbol in the first row, `None` for a gap.
    pub fn first(&self) -> Option<&T> {
        match self {
            Column::Pair(a, _) | Column::Deletion(a) => Some(a),
            Column::Insertion(_) => None,
        }
    }

    /// Symbol in the second row, `None` for a gap.
    pub fn second(&self) -> Option<&T> {
        match self {
            Column::Pair(_, b) | Column::Insertion(b) => Some(b),
            Column::Deletion(_) => None,
        }
    }

    /// The traceback move that produces this column.
    pub fn direction(&self) -> Direction {
        match self {
            Column::Pair(..) => Direction::Diagonal,
            Column::Deletion(_) => Direction::Up,
            Column::Insertion(_) => Direction::Left,
        }
    }

    /// Same position seen with the two sequences swapped.
    pub fn transpose(self) -> Column<T> {
        match self {
            Column::Pair(a, b) => Column::Pair(b, a),
            Column::Deletion(a) => Column::Insertion(a),
            Column::Insertion(b) => Column::Deletion(b),
        }
    }
}

/// A global alignment `(A', B')` of two sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alignment<T> {
    columns: Vec<Column<T>>,
}

impl<T> Alignment<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column<T>> {
        self.columns
    }

    /// Number of columns; both rows have this length.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// `A'`: the first row, gaps as `None`.
    pub fn first_row(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        self.columns.iter().map(Column::first)
    }

    /// `B'`: the second row, gaps as `None`.
    pub fn second_row(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        self.columns.iter().map(Column::second)
    }

    /// The first row with gaps removed; equals the first input sequence.
    pub fn ungapped_first(&self) -> Vec<&T> {
        self.first_row().flatten().collect()
    }

    /// The second row with gaps removed; equals the second input sequence.
    pub fn ungapped_second(&self) -> Vec<&T> {
        self.second_row().flatten().collect()
    }

    /// Traceback moves from the origin to the final cell.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.columns.iter().map(Column::direction)
    }

    /// Sum of the column scores under `scheme`.
    pub fn score<S: ScoringScheme<T>>(&self, scheme: &S) -> i32 {
        self.columns.iter().map(|c| scheme.score_column(c)).sum()
    }

    /// The same alignment with the roles of the two sequences swapped.
    pub fn transpose(self) -> Alignment<T> {
        Alignment::new(self.columns.into_iter().map(Column::transpose).collect())
    }
}

impl<T: fmt::Display> Alignment<T> {
    /// Both rows as strings, each symbol padded to the widest symbol in its
    /// column and gaps drawn with `gap`.
    pub fn rows(&self, gap: char) -> (String, String) {
        let mut top = String::new();
        let mut bottom = String::new();
        for column in &self.columns {
            let a = column.first().map(ToString::to_string);
            let b = column.second().map(ToString::to_string);
            let width = a
                .as_deref()
                .map_or(1, |s| s.chars().count())
                .max(b.as_deref().map_or(1, |s| s.chars().count()));
            push_cell(&mut top, a.as_deref(), gap, width);
            push_cell(&mut bottom, b.as_deref(), gap, width);
        }
        (top, bottom)
    }
}

fn push_cell(out: &mut String, symbol: Option<&str>, gap: char, width: usize) {
    match symbol {
        Some(s) => {
            out.push_str(s);
            out.extend(std::iter::repeat(' ').take(width - s.chars().count()));
        }
        None => out.extend(std::iter::repeat(gap).take(width)),
    }
}

impl<T: fmt::Display> fmt::Display for Alignment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (top, bottom) = self.rows('-');
        writeln!(f, "{top}")?;
        write!(f, "{bottom}")
    }
}
