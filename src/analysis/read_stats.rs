//! Descriptive statistics over parsed reads

use crate::error::Result;
use crate::io::FastqRecord;

/// Read-length statistics accumulated over a stream of records
///
/// # Example
///
/// ```
/// use localign::ReadStats;
///
/// let mut stats = ReadStats::default();
/// stats.record(100);
/// stats.record(120);
///
/// assert_eq!(stats.reads, 2);
/// assert_eq!(stats.min_len, 100);
/// assert_eq!(stats.max_len, 120);
/// assert_eq!(stats.mean_len(), 110.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadStats {
    /// Number of reads seen
    pub reads: u64,
    /// Shortest read length (0 when no reads were seen)
    pub min_len: usize,
    /// Longest read length
    pub max_len: usize,
    /// Total bases across all reads
    pub total_bases: u64,
}

impl ReadStats {
    /// Fold one read length into the statistics
    pub fn record(&mut self, len: usize) {
        if self.reads == 0 {
            self.min_len = len;
            self.max_len = len;
        } else {
            self.min_len = self.min_len.min(len);
            self.max_len = self.max_len.max(len);
        }
        self.reads += 1;
        self.total_bases += len as u64;
    }

    /// Mean read length; 0.0 for an empty stream
    pub fn mean_len(&self) -> f64 {
        if self.reads == 0 {
            0.0
        } else {
            self.total_bases as f64 / self.reads as f64
        }
    }

    /// Accumulate statistics from a record stream
    ///
    /// Stops at the first parse error and propagates it.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<FastqRecord>>,
    {
        let mut stats = Self::default();
        for record in records {
            stats.record(record?.sequence.len());
        }
        Ok(stats)
    }
}
