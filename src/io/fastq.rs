//! FASTQ streaming parser
//!
//! FASTQ is four lines per read: `@` header, sequence, `+` separator,
//! quality string. The parser validates that layout as it streams and
//! reports the offending line number on malformed input.

use crate::error::{LocalignError, Result};
use crate::io::compression::open_reader;
use std::io::BufRead;
use std::path::Path;

/// One FASTQ record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    /// Record identifier (first whitespace-separated token after `@`)
    pub id: String,
    /// Read sequence
    pub sequence: Vec<u8>,
    /// Per-base quality string, same length as the sequence
    pub quality: Vec<u8>,
}

/// Streaming FASTQ parser
///
/// Memory footprint is one record regardless of file size. Gzip input is
/// transparent when opened through [`from_path`].
///
/// [`from_path`]: FastqStream::from_path
///
/// # Example
///
/// ```no_run
/// use localign::FastqStream;
///
/// # fn main() -> localign::Result<()> {
/// for record in FastqStream::from_path("reads_1.fq")? {
///     let record = record?;
///     // Process one read at a time
/// }
/// # Ok(())
/// # }
/// ```
pub struct FastqStream<R: BufRead> {
    reader: R,
    line_buffer: String,
    line_number: usize,
}

impl FastqStream<Box<dyn BufRead + Send>> {
    /// Open a FASTQ file for streaming (gzip transparent by extension)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(open_reader(path)?))
    }
}

impl<R: BufRead> FastqStream<R> {
    /// Create a new FASTQ stream from a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::with_capacity(512),
            line_number: 0,
        }
    }

    /// Read one mandatory record line; EOF mid-record is an error
    fn record_line(&mut self, what: &str) -> Result<String> {
        self.line_buffer.clear();
        if self.reader.read_line(&mut self.line_buffer)? == 0 {
            return Err(LocalignError::InvalidFastqFormat {
                line: self.line_number,
                msg: format!("record truncated before {} line", what),
            });
        }
        self.line_number += 1;
        Ok(self.line_buffer.trim_end().to_string())
    }
}

impl<R: BufRead> Iterator for FastqStream<R> {
    type Item = Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        // Header line; blank lines between records are tolerated.
        let header = loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line_number += 1;
            let line = self.line_buffer.trim_end();
            if line.is_empty() {
                continue;
            }
            match line.strip_prefix('@') {
                Some(rest) => break rest.split_whitespace().next().unwrap_or("").to_string(),
                None => {
                    return Some(Err(LocalignError::InvalidFastqFormat {
                        line: self.line_number,
                        msg: format!("expected '@' header, found {:?}", line),
                    }));
                }
            }
        };

        let sequence = match self.record_line("sequence") {
            Ok(line) => line.into_bytes(),
            Err(e) => return Some(Err(e)),
        };

        let separator = match self.record_line("'+' separator") {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        if !separator.starts_with('+') {
            return Some(Err(LocalignError::InvalidFastqFormat {
                line: self.line_number,
                msg: format!("expected '+' separator, found {:?}", separator),
            }));
        }

        let quality = match self.record_line("quality") {
            Ok(line) => line.into_bytes(),
            Err(e) => return Some(Err(e)),
        };
        if quality.len() != sequence.len() {
            return Some(Err(LocalignError::InvalidFastqFormat {
                line: self.line_number,
                msg: format!(
                    "quality length {} does not match sequence length {}",
                    quality.len(),
                    sequence.len()
                ),
            }));
        }

        Some(Ok(FastqRecord {
            id: header,
            sequence,
            quality,
        }))
    }
}
