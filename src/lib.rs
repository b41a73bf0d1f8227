//! # Filepecker
//!
//! `filepecker` concatenates the text files of a directory tree into a single stream.
//! Each file is introduced by a header carrying its path. Hidden directories, binary files,
//! files with ignored extensions and the output file itself are left out.
//!
//! Traversal is single-threaded and depth-first with siblings sorted by name, so the
//! same tree always produces the same dump.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use filepecker::{CollectBuilder, collect, create_output};
//!
//! let options = CollectBuilder::new(".")
//!     .skip_output("file.txt")
//!     .ignored_extensions(["json", ".md"])
//!     .build();
//!
//! let mut sink = create_output("file.txt").expect("Failed to create output");
//! let report = collect(&options, &mut sink).expect("Failed to collect");
//!
//! println!("{} files written, {} skipped", report.files_written, report.files_skipped());
//! ```

mod detect;
mod engine;
mod error;
mod options;
mod output;
mod sniff;
mod types;

pub use detect::{SAMPLE_SIZE, is_binary, sample_is_binary};
pub use engine::{collect, file_extension};
pub use error::PeckerError;
pub use options::{
    BinaryDetection, CollectBuilder, CollectOptions, DEFAULT_OUTPUT, normalize_extension,
    parse_ignore_list,
};
pub use output::{SEPARATOR, create_output, format_header};
pub use sniff::{OCTET_STREAM, SNIFF_LEN, detect_content_type};
pub use types::{CollectReport, SkipReason};
