//! Smith-Waterman local alignment
//!
//! # Algorithm
//!
//! Smith-Waterman finds the optimal **local** alignment between two
//! sequences using dynamic programming: a score matrix built under a linear
//! scoring model, a row-major scan for the globally maximal cell, and a
//! traceback from that cell down to a zero cell. Unlike global alignment
//! (Needleman-Wunsch), it aligns the best-scoring pair of substrings, which
//! makes it the right tool for finding where a short read sits inside a
//! reference genome.
//!
//! This implementation enumerates **all** co-optimal alignments. When the
//! recurrence ties, each tie is a distinct optimal traceback path, and every
//! one of them is returned with its own start position.
//!
//! # Example
//!
//! ```
//! use localign::{smith_waterman, Scoring};
//!
//! # fn main() -> localign::Result<()> {
//! let result = smith_waterman(b"GGGGTTTAAAA", b"TGGGTGAAAA", &Scoring::default())?;
//!
//! assert_eq!(result.score, 11);
//! assert_eq!(result.alignments.len(), 3); // three co-optimal gap placements
//! assert_eq!(result.alignments[0].start, (1, 1));
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::alignment::matrix::ScoreMatrix;
use crate::alignment::{traceback, Scoring};
use crate::error::Result;

/// Options for one alignment call
///
/// The defaults render mismatches verbatim, use `-` as the gap marker, and
/// place no bound on the matrix or the enumeration. Unbounded enumeration is
/// deliberate but dangerous: tie-heavy inputs have exponentially many
/// co-optimal paths, so batch callers should set `max_alignments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignConfig {
    /// Character emitted opposite a gapped position
    pub gap_marker: u8,
    /// When set, this character replaces BOTH characters of a mismatched
    /// diagonal step; `None` keeps the real characters
    pub mismatch_marker: Option<u8>,
    /// Upper bound on enumerated co-optimal alignments; exceeding it fails
    /// with [`LocalignError::AlignmentLimit`] rather than truncating
    ///
    /// [`LocalignError::AlignmentLimit`]: crate::LocalignError::AlignmentLimit
    pub max_alignments: Option<usize>,
    /// Upper bound on `(m+1) * (n+1)` score matrix cells; exceeding it fails
    /// with [`LocalignError::MatrixLimit`] before allocating
    ///
    /// [`LocalignError::MatrixLimit`]: crate::LocalignError::MatrixLimit
    pub max_matrix_cells: Option<usize>,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            gap_marker: b'-',
            mismatch_marker: None,
            max_alignments: None,
            max_matrix_cells: None,
        }
    }
}

/// One co-optimal local alignment
///
/// The fragments are equal-length renderings of the aligned substrings:
/// diagonal steps contribute one character from each sequence, gap steps
/// contribute a real character on one side and the gap marker on the other.
/// Removing gap markers from a verbatim-rendered fragment reproduces a
/// contiguous substring of the corresponding input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAlignment {
    /// Cell where this path's traceback reached zero: the alignment's
    /// start position (row in seq1, column in seq2, both 0-based with 0
    /// meaning "before sequence start")
    pub start: (usize, usize),
    /// Aligned fragment of seq1
    pub seq1_fragment: Vec<u8>,
    /// Aligned fragment of seq2
    pub seq2_fragment: Vec<u8>,
}

impl LocalAlignment {
    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.seq1_fragment.len()
    }

    /// Check if the alignment is empty (score-zero case)
    pub fn is_empty(&self) -> bool {
        self.seq1_fragment.is_empty()
    }
}

impl fmt::Display for LocalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", String::from_utf8_lossy(&self.seq1_fragment))?;
        write!(f, "{}", String::from_utf8_lossy(&self.seq2_fragment))
    }
}

/// Alignment result: the score, the maximal cell, and every co-optimal
/// alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    /// Maximum score in the matrix; equals the matrix value at `end`
    pub score: i32,
    /// The maximal cell located by the row-major scan (smallest row, then
    /// smallest column, among ties); every traceback starts here, so this
    /// is the alignment end
    pub end: (usize, usize),
    /// Every co-optimal alignment, each with its own start position
    pub alignments: Vec<LocalAlignment>,
}

/// Smith-Waterman local alignment with default options
///
/// Builds the score matrix, locates the maximum, and enumerates every
/// co-optimal traceback path. See [`smith_waterman_with`] for resource
/// bounds and rendering options.
///
/// # Example
///
/// ```
/// use localign::{smith_waterman, Scoring};
///
/// let result = smith_waterman(b"ACGT", b"CGT", &Scoring::default()).unwrap();
/// assert_eq!(result.score, 6);
/// ```
pub fn smith_waterman(seq1: &[u8], seq2: &[u8], scoring: &Scoring) -> Result<AlignmentResult> {
    smith_waterman_with(seq1, seq2, scoring, &AlignConfig::default())
}

/// Smith-Waterman local alignment with explicit options
///
/// The matrix is created fresh for this call, fully computed before any
/// read, and dropped once the result is extracted. Failure is possible only
/// through the resource limits in `config`; the algorithm itself is total
/// over finite inputs.
pub fn smith_waterman_with(
    seq1: &[u8],
    seq2: &[u8],
    scoring: &Scoring,
    config: &AlignConfig,
) -> Result<AlignmentResult> {
    let matrix = ScoreMatrix::build_checked(seq1, seq2, scoring, config.max_matrix_cells)?;
    let (end, score) = matrix.find_max();
    let alignments = traceback::trace(&matrix, seq1, seq2, scoring, end, config)?;
    Ok(AlignmentResult {
        score,
        end,
        alignments,
    })
}

/// Align two sequences locally under explicit scoring weights
///
/// Convenience form of [`smith_waterman`] taking the three weights
/// directly.
///
/// # Example
///
/// ```
/// use localign::align_local;
///
/// let result = align_local(b"TGGGGAAAA", b"GGGGTTAAAA", 2, -2, -3).unwrap();
/// assert_eq!(result.score, 10);
/// assert_eq!(result.alignments[0].start, (1, 0));
/// ```
pub fn align_local(
    seq1: &[u8],
    seq2: &[u8],
    match_score: i32,
    mismatch_score: i32,
    gap_penalty: i32,
) -> Result<AlignmentResult> {
    smith_waterman(
        seq1,
        seq2,
        &Scoring::new(match_score, mismatch_score, gap_penalty),
    )
}
