//! Binary detection over the leading sample of a file.

use crate::error::PeckerError;
use crate::options::BinaryDetection;
use crate::sniff::{OCTET_STREAM, detect_content_type};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes read before deciding whether a file is binary.
pub const SAMPLE_SIZE: usize = 512;

/// Returns `true` when the file at `path` looks binary.
///
/// Reads at most [`SAMPLE_SIZE`] bytes. An empty file is text. The file is
/// binary when the sample contains a null byte or sniffs as
/// `application/octet-stream`.
///
/// # Errors
///
/// Returns [`PeckerError::Io`] if the file cannot be opened or read.
pub fn is_binary(path: &Path) -> Result<bool, PeckerError> {
    let mut file = File::open(path).map_err(|e| PeckerError::io(path, e))?;
    let sample = read_sample(&mut file).map_err(|e| PeckerError::io(path, e))?;
    Ok(sample_is_binary(&sample, BinaryDetection::Sniff))
}

pub(crate) fn read_sample<R: Read>(reader: &mut R) -> std::io::Result<Vec<u8>> {
    let mut sample = Vec::with_capacity(SAMPLE_SIZE);
    reader
        .by_ref()
        .take(SAMPLE_SIZE as u64)
        .read_to_end(&mut sample)?;
    Ok(sample)
}

/// Applies `method` to an already-read sample.
pub fn sample_is_binary(sample: &[u8], method: BinaryDetection) -> bool {
    if sample.is_empty() {
        return false;
    }
    match method {
        BinaryDetection::Sniff => {
            sample.contains(&0) || detect_content_type(sample).contains(OCTET_STREAM)
        }
        BinaryDetection::NullByte => sample.contains(&0),
        BinaryDetection::None => false,
    }
}
