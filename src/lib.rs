//! localign: local sequence alignment with exhaustive co-optimal traceback
//!
//! The core is a Smith-Waterman engine that reports the optimal local
//! alignment score, the alignment start position, and **every** co-optimal
//! alignment: when the dynamic-programming recurrence ties, each tie is a
//! distinct optimal traceback path and all of them are enumerated.
//!
//! Around the core sits the thin analysis layer a read-file workflow needs:
//! streaming FASTA/FASTQ parsers (with transparent gzip), read-length
//! statistics, k-mer frequency spectra, and histogram output.
//!
//! # Quick start
//!
//! ```
//! use localign::align_local;
//!
//! # fn main() -> localign::Result<()> {
//! let result = align_local(b"GGGGTTTAAAA", b"TGGGTGAAAA", 2, -2, -3)?;
//!
//! assert_eq!(result.score, 11);
//! for alignment in &result.alignments {
//!     assert_eq!(alignment.start, (1, 1));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Resource bounds
//!
//! The algorithm is total over finite inputs; its only failure category is
//! resource exhaustion. Both the `(m+1) x (n+1)` matrix allocation and the
//! (potentially exponential) co-optimal enumeration can be bounded through
//! [`AlignConfig`], and exceeding a bound is an explicit error, never a
//! silently truncated result.

pub mod alignment;
pub mod analysis;
pub mod error;
pub mod io;

pub use alignment::{
    align_local, smith_waterman, smith_waterman_with, AlignConfig, AlignmentResult,
    LocalAlignment, ScoreMatrix, Scoring,
};
pub use analysis::{
    align_reads, plotly_histogram_payload, CountHistogram, KmerCounts, ReadAlignment, ReadStats,
    DEFAULT_K,
};
pub use error::{LocalignError, Result};
pub use io::{FastaRecord, FastaStream, FastqRecord, FastqStream};
