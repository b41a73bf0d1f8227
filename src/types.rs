use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a file was left out of the dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The basename matched the configured skip name.
    OwnOutput,
    /// The extension is in the ignore set.
    IgnoredExtension,
    /// The leading sample looked binary.
    Binary,
    /// The file could not be opened or sampled (skip-on-read-error).
    Unreadable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::OwnOutput => "own output",
            SkipReason::IgnoredExtension => "ignored extension",
            SkipReason::Binary => "binary",
            SkipReason::Unreadable => "unreadable",
        };
        f.write_str(reason)
    }
}

/// Totals for a single collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectReport {
    /// Files whose block was written to the sink.
    pub files_written: usize,
    /// Bytes written to the sink, headers and trailing newlines included.
    pub bytes_written: u64,
    pub skipped_own_output: usize,
    pub skipped_extension: usize,
    pub skipped_binary: usize,
    pub skipped_unreadable: usize,
}

impl CollectReport {
    pub fn files_skipped(&self) -> usize {
        self.skipped_own_output + self.skipped_extension + self.skipped_binary + self.skipped_unreadable
    }

    pub(crate) fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::OwnOutput => self.skipped_own_output += 1,
            SkipReason::IgnoredExtension => self.skipped_extension += 1,
            SkipReason::Binary => self.skipped_binary += 1,
            SkipReason::Unreadable => self.skipped_unreadable += 1,
        }
    }
}
