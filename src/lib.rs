//! Needleman–Wunsch global alignment with exhaustive tie enumeration.
//!
//! Classic global aligners keep one predecessor per cell and so return one
//! optimal alignment. This crate keeps every predecessor whose candidate
//! score ties for the cell's maximum and then walks all of them, returning
//! *every* alignment that reaches the optimal score.
//!
//! ## Core idea
//! 1. Fill the `(m+1) x (n+1)` score matrix under a linear scheme
//!    (match, mismatch, gap), recording for each cell the set of tied moves
//!    among diagonal, up and left.
//! 2. Trace back from `(m, n)` to `(0, 0)` along every recorded move.
//!
//! Matrix construction is `Θ(m·n)` in time and space. Traceback costs are
//! proportional to the number of optimal alignments times their length,
//! which can be exponential on repetitive input; see
//! [`AlignmentEngine::with_max_alignments`] and [`DpTables::alignments`] for
//! ways to bound that work.
//!
//! ## Quick start
//! ```
//! use nw_all::AlignmentEngine;
//!
//! let engine = AlignmentEngine::new(1, -1, -1);
//! let result = engine.align(b"AC", b"CA").unwrap();
//! assert_eq!(result.score, -1);
//! assert_eq!(result.alignments.len(), 2);
//! ```
//!
//! Symbols may be any type with `PartialEq`: bytes, `char`s, or whole tokens.
//!
//! ## Features
//! - `parallel`: [`AlignmentEngine::align_many`] spreads independent pairs
//!   over the rayon thread pool.
//! - `tracing`: spans around the fill and traceback phases.

pub mod alignment;
pub mod builder;
pub mod direction;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod scoring;
pub mod traceback;
pub mod traits;
pub mod utils;

pub use crate::alignment::{Alignment, Column};
pub use crate::builder::AlignmentEngineBuilder;
pub use crate::direction::{Direction, DirectionSet};
pub use crate::engine::{AlignmentEngine, AlignmentResult, DpTables};
pub use crate::error::{AlignError, Result};
pub use crate::matrix::{DirectionGrid, Grid, ScoreMatrix};
pub use crate::scoring::LinearScoring;
pub use crate::traits::ScoringScheme;
