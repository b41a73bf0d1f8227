use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum PeckerError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
    #[error("Error getting current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
    #[error("Error creating output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}
impl PeckerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PeckerError::Io {
            path: path.into(),
            source,
        }
    }
}
