//! CLI error type.

use std::path::PathBuf;

use tabsort::SortError;
use thiserror::Error;

/// Errors that end a `tabsort` run.
///
/// Malformed command lines never get here: clap reports those and exits.
#[derive(Debug, Error)]
pub enum CliError {
    /// A table or config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A table or config file is not valid JSON for its shape.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The report could not be encoded.
    #[error("failed to encode output: {0}")]
    Output(serde_json::Error),
    /// The table's columns or the replayed clicks were rejected.
    #[error(transparent)]
    Sort(#[from] SortError),
}
