//! Batch read-vs-reference alignment

use rayon::prelude::*;

use crate::alignment::{smith_waterman_with, AlignConfig, AlignmentResult, Scoring};
use crate::error::Result;
use crate::io::FastqRecord;

/// Alignment of one read against the reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadAlignment {
    /// Identifier of the aligned read
    pub read_id: String,
    /// Full alignment result; `start` rows index the read, columns the
    /// reference
    pub result: AlignmentResult,
}

/// Align every read against one reference, in parallel
///
/// Each read is an independent alignment with its own matrix, so the batch
/// fans out over rayon's thread pool with no shared mutable state. Batch
/// callers should bound `config.max_alignments`; one tie-heavy read would
/// otherwise stall the whole batch. The first resource-limit error aborts
/// the batch and propagates.
///
/// # Example
///
/// ```
/// use localign::{align_reads, AlignConfig, FastqRecord, Scoring};
///
/// let reference = b"GGGCGGCGACCTCGCGGGTT";
/// let reads = vec![FastqRecord {
///     id: "r1".to_string(),
///     sequence: b"CGGCGACC".to_vec(),
///     quality: b"IIIIIIII".to_vec(),
/// }];
///
/// let config = AlignConfig { max_alignments: Some(64), ..AlignConfig::default() };
/// let mapped = align_reads(reference, &reads, &Scoring::default(), &config).unwrap();
/// assert_eq!(mapped[0].result.score, 16);
/// ```
pub fn align_reads(
    reference: &[u8],
    reads: &[FastqRecord],
    scoring: &Scoring,
    config: &AlignConfig,
) -> Result<Vec<ReadAlignment>> {
    reads
        .par_iter()
        .map(|read| {
            let result = smith_waterman_with(&read.sequence, reference, scoring, config)?;
            Ok(ReadAlignment {
                read_id: read.id.clone(),
                result,
            })
        })
        .collect()
}
