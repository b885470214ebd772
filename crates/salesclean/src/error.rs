//! Error types for the salesclean library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for salesclean operations.
///
/// Only loading and writing can fail. The cleaning stages themselves are
/// total: bad cells become nulls and are removed by the row validator.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input has no header row.
    #[error("Empty data: {0}")]
    EmptyData(String),
}

impl CleanError {
    /// Wrap an I/O error together with the path it concerns.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for salesclean operations.
pub type Result<T> = std::result::Result<T, CleanError>;
