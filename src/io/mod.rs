//! I/O module: streaming parsers for record-oriented genomic text formats
//!
//! Parsers hand plain character sequences to the alignment core: record
//! headers and line breaks are stripped here, one record at a time, so
//! memory stays constant regardless of file size. Gzip input is handled
//! transparently by file extension.

pub mod compression;
pub mod fasta;
pub mod fastq;

pub use compression::open_reader;
pub use fasta::{read_first_sequence, FastaRecord, FastaStream};
pub use fastq::{FastqRecord, FastqStream};
