//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading inputs or writing output.
///
/// "Not found" conditions inside the hierarchy (missing path segments,
/// absent descriptions) are represented as `Option`, never as an error.
#[derive(Error, Debug)]
pub enum DocError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no exported labels in: {0}")]
    EmptyExports(PathBuf),
}

pub type DocResult<T> = Result<T, DocError>;
