//! Local sequence alignment
//!
//! Smith-Waterman alignment split along its three stages:
//!
//! - [`matrix`]: score matrix construction and global-maximum location
//! - [`traceback`]: branching traceback enumerating every co-optimal path
//! - [`smith_waterman`]: result assembly and the public entry points
//!
//! The scoring model is linear (one weight per match, mismatch, and gap
//! position). The engine is single-threaded and synchronous: the matrix is
//! written once, then read-only, and each traceback branch owns disjoint
//! state.
//!
//! # Example
//!
//! ```
//! use localign::{smith_waterman, Scoring};
//!
//! let result = smith_waterman(b"AATCGCGTGTAA", b"GAAGTCTAA", &Scoring::default()).unwrap();
//! assert_eq!(result.score, 8);
//! assert_eq!(result.alignments[0].start, (6, 3));
//! ```

pub mod matrix;
pub mod scoring;
pub mod smith_waterman;
pub mod traceback;

// Re-export public API
pub use matrix::ScoreMatrix;
pub use scoring::Scoring;
pub use smith_waterman::{
    align_local, smith_waterman, smith_waterman_with, AlignConfig, AlignmentResult,
    LocalAlignment,
};
pub use traceback::trace;
