//! Block framing for the dump.
//!
//! Every included file becomes one block: a header naming the path, the
//! raw file bytes, and a single trailing newline. There is no manifest or
//! trailer, so the dump is meant for reading rather than splitting back into
//! files.

use crate::error::PeckerError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Rule line opening each block header.
pub const SEPARATOR: &str = "========================================";

/// Formats the header written before a file's content.
pub fn format_header(path: &Path) -> String {
    format!("\n{}\nPATH: {}\n---\n", SEPARATOR, path.display())
}

/// Writes the header for `path` and returns the number of bytes written.
pub(crate) fn write_header<W: Write + ?Sized>(sink: &mut W, path: &Path) -> io::Result<u64> {
    let header = format_header(path);
    sink.write_all(header.as_bytes())?;
    Ok(header.len() as u64)
}

pub(crate) fn write_trailer<W: Write + ?Sized>(sink: &mut W) -> io::Result<u64> {
    sink.write_all(b"\n")?;
    Ok(1)
}

/// Creates (or truncates) the output file and wraps it in a buffered writer.
pub fn create_output(path: impl AsRef<Path>) -> Result<BufWriter<File>, PeckerError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| PeckerError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}
