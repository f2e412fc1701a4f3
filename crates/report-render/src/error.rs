//! Error types for report rendering.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Style file could not be parsed.
    #[error("invalid style file: {0}")]
    Style(#[from] toml::de::Error),

    /// Style values that cannot produce a legible page.
    #[error("invalid style: {reason}")]
    InvalidStyle { reason: String },

    /// PDF content could not be serialized.
    #[error("failed to encode PDF: {message}")]
    Encode { message: String },

    /// Destination not writable.
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
