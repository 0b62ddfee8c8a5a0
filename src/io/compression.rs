//! Transparent input decompression

use crate::error::Result;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Open a file for buffered reading, decompressing gzip by extension
///
/// Files ending in `.gz` are wrapped in a [`GzDecoder`]; everything else is
/// read as plain text. Callers see a uniform `BufRead` either way.
///
/// # Example
///
/// ```no_run
/// use localign::io::open_reader;
///
/// # fn main() -> localign::Result<()> {
/// let reader = open_reader("reads_1.fq.gz")?;
/// # Ok(())
/// # }
/// ```
pub fn open_reader<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead + Send>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    if path.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
