//! FASTA streaming parser
//!
//! Reference genomes arrive as FASTA: a `>` header line followed by
//! sequence text wrapped at arbitrary line lengths. The parser strips
//! headers and line breaks and yields each record's sequence as one
//! contiguous byte vector, streaming one record at a time.

use crate::error::{LocalignError, Result};
use crate::io::compression::open_reader;
use std::io::BufRead;
use std::path::Path;

/// One FASTA record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Record identifier (first whitespace-separated token after `>`)
    pub id: String,
    /// Sequence with line breaks removed
    pub sequence: Vec<u8>,
}

/// Streaming FASTA parser
///
/// Iterates over records without loading the whole file. Errors carry the
/// line number where parsing failed.
///
/// # Example
///
/// ```no_run
/// use localign::FastaStream;
///
/// # fn main() -> localign::Result<()> {
/// for record in FastaStream::from_path("lambda_virus.fa")? {
///     let record = record?;
///     println!("{}: {} bases", record.id, record.sequence.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct FastaStream<R: BufRead> {
    reader: R,
    line_buffer: String,
    line_number: usize,
    pending_header: Option<String>,
}

impl FastaStream<Box<dyn BufRead + Send>> {
    /// Open a FASTA file for streaming (gzip transparent by extension)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(open_reader(path)?))
    }
}

impl<R: BufRead> FastaStream<R> {
    /// Create a new FASTA stream from a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::with_capacity(512),
            line_number: 0,
            pending_header: None,
        }
    }

    /// Read the next line into the internal buffer; Ok(false) at EOF
    fn fill_line(&mut self) -> Result<bool> {
        self.line_buffer.clear();
        if self.reader.read_line(&mut self.line_buffer)? == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        Ok(true)
    }
}

impl<R: BufRead> Iterator for FastaStream<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        // Header: either left over from the previous record or the next
        // non-blank line.
        let header = match self.pending_header.take() {
            Some(header) => header,
            None => loop {
                match self.fill_line() {
                    Ok(false) => return None,
                    Ok(true) => {}
                    Err(e) => return Some(Err(e)),
                }
                let line = self.line_buffer.trim_end();
                if line.is_empty() {
                    continue;
                }
                match line.strip_prefix('>') {
                    Some(rest) => break rest.to_string(),
                    None => {
                        return Some(Err(LocalignError::InvalidFastaFormat {
                            line: self.line_number,
                            msg: format!("expected '>' header, found {:?}", line),
                        }));
                    }
                }
            },
        };

        let id = header.split_whitespace().next().unwrap_or("").to_string();

        // Sequence lines until the next header or EOF.
        let mut sequence = Vec::new();
        loop {
            match self.fill_line() {
                Ok(false) => break,
                Ok(true) => {}
                Err(e) => return Some(Err(e)),
            }
            let line = self.line_buffer.trim_end();
            if line.is_empty() {
                continue;
            }
            if let Some(rest) = line.strip_prefix('>') {
                self.pending_header = Some(rest.to_string());
                break;
            }
            sequence.extend_from_slice(line.as_bytes());
        }

        Some(Ok(FastaRecord { id, sequence }))
    }
}

/// Read the first sequence of a FASTA file
///
/// Convenience for the single-genome case: the reference is one record and
/// only its sequence matters.
pub fn read_first_sequence<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let mut stream = FastaStream::from_path(path)?;
    match stream.next() {
        Some(record) => Ok(record?.sequence),
        None => Err(LocalignError::InvalidFastaFormat {
            line: 0,
            msg: "file contains no records".to_string(),
        }),
    }
}
