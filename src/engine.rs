use crate::detect::{read_sample, sample_is_binary};
use crate::error::PeckerError;
use crate::options::{BinaryDetection, CollectOptions};
use crate::output::{write_header, write_trailer};
use crate::types::{CollectReport, SkipReason};
use ignore::{DirEntry, WalkBuilder};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &CollectOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| {
                let hidden = is_hidden_dir(entry);
                if hidden {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipping hidden directory: {}", entry.path().display());
                }
                !hidden
            });
        Self {
            inner: builder.build(),
        }
    }
}
impl Iterator for Walker {
    type Item = Result<DirEntry, PeckerError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|result| result.map_err(|e| PeckerError::Walk(e.to_string())))
    }
}
fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|ft| ft.is_dir())
        && entry.file_name().as_encoded_bytes().starts_with(b".")
}

/// Returns the extension of a file name the way the ignore set spells it:
/// everything from the last `.` on, dot included, or `""` if there is none.
pub fn file_extension(name: &str) -> &str {
    name.rfind('.').map_or("", |i| &name[i..])
}

fn filter_by_name(options: &CollectOptions, name: &OsStr) -> Option<SkipReason> {
    if let Some(skip) = options.skip_name.as_deref() {
        if name == OsStr::new(skip) {
            return Some(SkipReason::OwnOutput);
        }
    }
    let name = name.to_string_lossy();
    if options.ignored_extensions.contains(file_extension(&name)) {
        return Some(SkipReason::IgnoredExtension);
    }
    None
}

enum Verdict {
    Include { file: File, sample: Vec<u8> },
    Skip(SkipReason),
}

// Opens and samples the file once; the same handle is reused for the copy.
// Failing to open or sample is skip-on-read-error, never a run failure.
fn inspect_file(path: &Path, method: BinaryDetection) -> Verdict {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Cannot open {}: {}", path.display(), _e);
            return Verdict::Skip(SkipReason::Unreadable);
        }
    };
    let sample = match read_sample(&mut file) {
        Ok(sample) => sample,
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Cannot read {}: {}", path.display(), _e);
            return Verdict::Skip(SkipReason::Unreadable);
        }
    };
    if sample_is_binary(&sample, method) {
        Verdict::Skip(SkipReason::Binary)
    } else {
        Verdict::Include { file, sample }
    }
}

fn write_block<W: Write + ?Sized>(
    sink: &mut W,
    path: &Path,
    mut file: File,
    sample: &[u8],
) -> Result<u64, PeckerError> {
    let mut written = write_header(sink, path).map_err(PeckerError::Write)?;
    sink.write_all(sample).map_err(PeckerError::Write)?;
    written += sample.len() as u64;
    written += io::copy(&mut file, sink).map_err(|e| PeckerError::io(path, e))?;
    written += write_trailer(sink).map_err(PeckerError::Write)?;
    Ok(written)
}

/// Walks `options.root` and writes one block per collected file into `sink`.
///
/// Hidden directories below the root are not entered. Files are skipped when
/// their basename is the skip name, their extension is ignored, they look
/// binary, or they cannot be opened or sampled. Siblings are visited in file
/// name order, so identical trees produce identical output.
///
/// # Errors
///
/// Directory listing failures and sink write failures stop the run. Blocks
/// written before the failure stay in the sink.
pub fn collect<W: Write + ?Sized>(
    options: &CollectOptions,
    sink: &mut W,
) -> Result<CollectReport, PeckerError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting collection at root: {}", options.root.display());
    let mut report = CollectReport::default();
    for entry in Walker::new(options) {
        let entry = entry?;
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        let path = entry.path();
        let verdict = match filter_by_name(options, entry.file_name()) {
            Some(reason) => Verdict::Skip(reason),
            None => inspect_file(path, options.binary_detection),
        };
        match verdict {
            Verdict::Include { file, sample } => {
                report.bytes_written += write_block(sink, path, file, &sample)?;
                report.files_written += 1;
                #[cfg(feature = "logging")]
                tracing::debug!("Collected {}", path.display());
            }
            Verdict::Skip(reason) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping {} ({})", path.display(), reason);
                report.record_skip(reason);
            }
        }
    }
    sink.flush().map_err(PeckerError::Write)?;
    #[cfg(feature = "logging")]
    tracing::info!(
        "Collected {} files ({} bytes), skipped {}",
        report.files_written,
        report.bytes_written,
        report.files_skipped()
    );
    Ok(report)
}
