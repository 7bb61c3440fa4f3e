//! Error types for the ingestion and output pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline errors.
///
/// Duration parse failures are deliberately absent: they are recovered
/// where they occur (see [`crate::duration::parse_duration_or_zero`]).
#[derive(Debug, Error)]
pub enum Error {
    /// A file or directory could not be opened, created, read, or written.
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A required path was never supplied.
    #[error("no {what} path given")]
    MissingPath { what: &'static str },

    /// A row has too few positional fields to be indexed.
    #[error("row {line} has {fields} fields, expected at least {expected}")]
    StructuralRow {
        line: u64,
        fields: usize,
        expected: usize,
    },

    /// The CSV reader rejected the input.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Output could not be serialized.
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an I/O error with the path it concerns.
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
