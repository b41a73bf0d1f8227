use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Output filename used when none is given on the command line.
pub const DEFAULT_OUTPUT: &str = "file.txt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// Null-byte scan followed by a content-type sniff of the sample.
    #[default]
    Sniff,
    /// Null-byte scan only.
    NullByte,
    /// Every file is treated as text.
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectOptions {
    pub root: PathBuf,
    /// Basename that is never collected, normally the output file itself.
    pub skip_name: Option<String>,
    /// Dot-prefixed extensions, compared case-sensitively.
    pub ignored_extensions: BTreeSet<String>,
    pub binary_detection: BinaryDetection,
}
impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            skip_name: None,
            ignored_extensions: BTreeSet::new(),
            binary_detection: BinaryDetection::Sniff,
        }
    }
}
#[derive(Debug, Default)]
pub struct CollectBuilder {
    options: CollectOptions,
}
impl CollectBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: CollectOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn skip_name(mut self, name: impl Into<String>) -> Self {
        self.options.skip_name = Some(name.into());
        self
    }
    /// Skips files named like the basename of `output`.
    pub fn skip_output(mut self, output: impl AsRef<Path>) -> Self {
        self.options.skip_name = output
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        self
    }
    pub fn ignore_extension(mut self, ext: &str) -> Self {
        self.options
            .ignored_extensions
            .insert(normalize_extension(ext));
        self
    }
    pub fn ignored_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.ignored_extensions = exts
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> CollectOptions {
        self.options
    }
}

/// Trims `ext` and prepends a `.` when missing.
///
/// A blank item becomes `"."`, which matches file names ending in a dot.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

/// Parses a comma-separated extension list such as `"json, .md,txt"`.
///
/// An empty list yields an empty set; empty items inside a non-empty list
/// normalize to `"."`.
pub fn parse_ignore_list(list: &str) -> BTreeSet<String> {
    if list.is_empty() {
        return BTreeSet::new();
    }
    list.split(',').map(normalize_extension).collect()
}
