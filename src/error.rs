//! Error types for localign

use std::fmt;

/// Result type alias for localign operations
pub type Result<T> = std::result::Result<T, LocalignError>;

/// Error types that can occur in localign
#[derive(Debug)]
pub enum LocalignError {
    /// I/O error
    Io(std::io::Error),

    /// Invalid FASTA format
    InvalidFastaFormat {
        /// Line number where error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// Invalid FASTQ format
    InvalidFastqFormat {
        /// Line number where error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// Score matrix would exceed the configured cell budget
    MatrixLimit {
        /// Requested row count (m + 1)
        rows: usize,
        /// Requested column count (n + 1)
        cols: usize,
        /// Configured cell limit
        limit: usize,
    },

    /// Traceback found more co-optimal alignments than allowed
    AlignmentLimit {
        /// Configured alignment limit
        limit: usize,
    },

    /// Network error
    #[cfg(feature = "network")]
    Network(String),
}

impl fmt::Display for LocalignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalignError::Io(e) => write!(f, "I/O error: {}", e),
            LocalignError::InvalidFastaFormat { line, msg } => {
                write!(f, "Invalid FASTA format at line {}: {}", line, msg)
            }
            LocalignError::InvalidFastqFormat { line, msg } => {
                write!(f, "Invalid FASTQ format at line {}: {}", line, msg)
            }
            LocalignError::MatrixLimit { rows, cols, limit } => {
                write!(
                    f,
                    "Score matrix of {}x{} cells exceeds the limit of {} cells",
                    rows, cols, limit
                )
            }
            LocalignError::AlignmentLimit { limit } => {
                write!(f, "More than {} co-optimal alignments", limit)
            }
            #[cfg(feature = "network")]
            LocalignError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for LocalignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LocalignError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LocalignError {
    fn from(error: std::io::Error) -> Self {
        LocalignError::Io(error)
    }
}
