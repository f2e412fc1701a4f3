//! Error types for table loading.

use std::path::PathBuf;

use report_model::TableError;
use thiserror::Error;

/// Errors that can occur while loading a source into a [`report_model::Table`].
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file does not exist.
    #[error("source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Source exists but could not be read.
    #[error("failed to read source {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Structurally inconsistent source (field count mismatch, no header, bad bytes).
    #[error("malformed source {path} (line {line}): {reason}")]
    MalformedSource {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// Parsed columns did not form a valid table.
    #[error("invalid table in {path}: {source}")]
    InvalidTable {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}

impl IngestError {
    pub(crate) fn open(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::SourceRead {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }

    pub(crate) fn from_csv(path: &std::path::Path, error: csv::Error) -> Self {
        let line = error.position().map_or(0, csv::Position::line);
        let reason = error.to_string();
        match error.into_kind() {
            csv::ErrorKind::Io(source) => Self::SourceRead {
                path: path.to_path_buf(),
                source,
            },
            _ => Self::MalformedSource {
                path: path.to_path_buf(),
                line,
                reason,
            },
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;
