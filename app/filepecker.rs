//! Command-line interface for filepecker.
//!
//! Dumps every text file under the current directory into one output file,
//! each preceded by a path header.

use clap::Parser;
use filepecker::{
    BinaryDetection, CollectBuilder, CollectOptions, DEFAULT_OUTPUT, PeckerError, collect,
    create_output, parse_ignore_list,
};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::exit;

/// filepecker — dump a project's text files into one annotated file
#[derive(Parser)]
#[command(name = "filepecker", version, about, long_about = None)]
struct Cli {
    /// Output filename
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Comma-separated extensions to ignore (e.g. .json,.md)
    #[arg(long = "ignore", default_value = "")]
    ignore: String,

    /// Binary detection strategy
    #[arg(long, default_value = "sniff", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "sniff" => Ok(BinaryDetection::Sniff),
        "null-byte" => Ok(BinaryDetection::NullByte),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn to_options(&self, root: PathBuf) -> CollectOptions {
        CollectBuilder::new(root)
            .skip_output(&self.output)
            .ignored_extensions(parse_ignore_list(&self.ignore))
            .binary_detection(self.binary_detection)
            .build()
    }
}

/// Rewrites the single-dash `-ignore` spelling into clap's `--ignore`.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-ignore") => OsString::from("--ignore"),
            Some(s) if s.starts_with("-ignore=") => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}

fn main() {
    let cli = Cli::parse_from(normalize_args(env::args_os()));
    if let Err(e) = run(&cli) {
        println!("Error: {}", e);
        exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), PeckerError> {
    let root = env::current_dir().map_err(PeckerError::CurrentDir)?;
    let options = cli.to_options(root);
    let mut sink = create_output(&cli.output)?;

    let ignoring = serde_json::to_string(&options.ignored_extensions)
        .unwrap_or_else(|_| format!("{:?}", options.ignored_extensions));
    println!(
        "Scanning: {}\nOutput: {}\nIgnoring: {}",
        options.root.display(),
        cli.output.display(),
        ignoring
    );

    collect(&options, &mut sink)?;
    println!("Done!");
    Ok(())
}
