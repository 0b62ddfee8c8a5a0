//! Branching traceback over a completed score matrix
//!
//! Smith-Waterman traceback is usually presented as following a single
//! recorded direction per cell. That loses information: whenever two or
//! three predecessor transitions tie in the recurrence, each tie is a
//! genuinely distinct co-optimal alignment. This engine re-derives the
//! predecessor equations from the scoring model at every cell and explores
//! ALL of them, so the caller gets every alignment of optimal score, not an
//! arbitrary one.
//!
//! # Implementation notes
//!
//! - Path enumeration runs on an explicit work stack instead of recursion;
//!   path depth is bounded by `row + col` of the start cell, which for long
//!   sequences would overflow the call stack.
//! - Branches share their common prefix through `Rc`-linked parent
//!   pointers. Diverging costs one `Rc` clone, so memory stays proportional
//!   to the live path length rather than the branch count.
//! - Each completed path is rendered and pushed by the loop that owns the
//!   output vector; branches never share a mutable accumulator.
//!
//! The number of co-optimal paths is exponential in the number of ties for
//! pathological inputs. Enumeration is unbounded by default;
//! [`AlignConfig::max_alignments`] turns overflow into an explicit
//! [`LocalignError::AlignmentLimit`] instead of a truncated result set.

use std::rc::Rc;

use crate::alignment::matrix::ScoreMatrix;
use crate::alignment::smith_waterman::{AlignConfig, LocalAlignment};
use crate::alignment::Scoring;
use crate::error::{LocalignError, Result};

/// One traceback transition, tagged with the cell it left
#[derive(Debug, Clone, Copy)]
enum Step {
    /// Consumed seq1[row-1] and seq2[col-1]; moved to (row-1, col-1)
    Diagonal { row: usize, col: usize },
    /// Consumed seq1[row-1] against a gap in seq2; moved to (row-1, col)
    Up { row: usize },
    /// Consumed seq2[col-1] against a gap in seq1; moved to (row, col-1)
    Left { col: usize },
}

/// Reverse-linked path node; branches share their common prefix
struct PathNode {
    step: Step,
    prev: Option<Rc<PathNode>>,
}

/// One in-flight traceback branch: current cell plus the path that led here
struct Branch {
    row: usize,
    col: usize,
    tail: Option<Rc<PathNode>>,
}

/// Enumerate every co-optimal alignment path from `start` down to a zero cell
///
/// `start` is normally the maximal cell reported by
/// [`ScoreMatrix::find_max`], but any cell of the matrix is legal; starting
/// on a zero cell yields a single empty alignment. Each returned
/// [`LocalAlignment`] records the zero cell its own path terminated at;
/// co-optimal paths may end at different cells, so the start position is
/// per-alignment state.
///
/// Fails with [`LocalignError::AlignmentLimit`] if the enumeration would
/// exceed `config.max_alignments`; the matrix itself is never mutated.
pub fn trace(
    matrix: &ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
    scoring: &Scoring,
    start: (usize, usize),
    config: &AlignConfig,
) -> Result<Vec<LocalAlignment>> {
    let mut alignments = Vec::new();
    let mut work = vec![Branch {
        row: start.0,
        col: start.1,
        tail: None,
    }];

    while let Some(Branch { row, col, tail }) = work.pop() {
        let value = matrix.get(row, col);
        if value == 0 {
            // Path complete: the zero cell is this alignment's start
            // position in the original sequences.
            if let Some(limit) = config.max_alignments {
                if alignments.len() >= limit {
                    return Err(LocalignError::AlignmentLimit { limit });
                }
            }
            alignments.push(render(seq1, seq2, (row, col), tail.as_ref(), config));
            continue;
        }

        // value > 0 implies row >= 1 and col >= 1: border cells are zero.
        debug_assert!(row >= 1 && col >= 1);

        let diagonal =
            matrix.get(row - 1, col - 1) + scoring.score(seq1[row - 1], seq2[col - 1]);
        let up = matrix.get(row - 1, col) + scoring.gap_penalty;
        let left = matrix.get(row, col - 1) + scoring.gap_penalty;

        // Every equation that holds is a valid predecessor; branch into all
        // of them. Horizontal and vertical are pushed first so the diagonal
        // branch pops first, keeping enumeration order deterministic.
        if value == left {
            work.push(Branch {
                row,
                col: col - 1,
                tail: Some(Rc::new(PathNode {
                    step: Step::Left { col },
                    prev: tail.clone(),
                })),
            });
        }
        if value == up {
            work.push(Branch {
                row: row - 1,
                col,
                tail: Some(Rc::new(PathNode {
                    step: Step::Up { row },
                    prev: tail.clone(),
                })),
            });
        }
        if value == diagonal {
            work.push(Branch {
                row: row - 1,
                col: col - 1,
                tail: Some(Rc::new(PathNode {
                    step: Step::Diagonal { row, col },
                    prev: tail,
                })),
            });
        }
    }

    Ok(alignments)
}

/// Render a completed path into a pair of aligned fragments
///
/// Steps were recorded walking backwards from the maximal cell, so the tail
/// node holds the step closest to the terminal cell. Following the parent
/// pointers therefore yields steps in forward (left-to-right) alignment
/// order with no reversal pass.
fn render(
    seq1: &[u8],
    seq2: &[u8],
    terminal: (usize, usize),
    tail: Option<&Rc<PathNode>>,
    config: &AlignConfig,
) -> LocalAlignment {
    let mut seq1_fragment = Vec::new();
    let mut seq2_fragment = Vec::new();

    let mut node = tail;
    while let Some(current) = node {
        match current.step {
            Step::Diagonal { row, col } => {
                let a = seq1[row - 1];
                let b = seq2[col - 1];
                match config.mismatch_marker {
                    Some(marker) if a != b => {
                        seq1_fragment.push(marker);
                        seq2_fragment.push(marker);
                    }
                    _ => {
                        seq1_fragment.push(a);
                        seq2_fragment.push(b);
                    }
                }
            }
            Step::Up { row } => {
                seq1_fragment.push(seq1[row - 1]);
                seq2_fragment.push(config.gap_marker);
            }
            Step::Left { col } => {
                seq1_fragment.push(config.gap_marker);
                seq2_fragment.push(seq2[col - 1]);
            }
        }
        node = current.prev.as_ref();
    }

    LocalAlignment {
        start: terminal,
        seq1_fragment,
        seq2_fragment,
    }
}
