//! Read-file analysis: descriptive statistics, k-mer spectra, histograms,
//! and batch read-vs-reference alignment
//!
//! Thin aggregation over the streaming parsers in [`crate::io`]; the only
//! algorithmic work lives in [`crate::alignment`].

pub mod histogram;
pub mod kmers;
pub mod mapper;
pub mod read_stats;

#[cfg(feature = "network")]
pub mod publish;

pub use histogram::{plotly_histogram_payload, CountHistogram};
pub use kmers::{KmerCounts, DEFAULT_K};
pub use mapper::{align_reads, ReadAlignment};
pub use read_stats::ReadStats;

#[cfg(feature = "network")]
pub use publish::publish_histogram;
