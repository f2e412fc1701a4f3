//! Table loading for the report pipeline.
//!
//! Parses a delimited-text source into a [`report_model::Table`], inferring a
//! [`report_model::CellValue`] kind for every field.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use report_ingest::{load, load_with_options, LoadOptions};
//!
//! let table = load(Path::new("data.csv"))?;
//! let tsv = load_with_options(Path::new("data.tsv"), &LoadOptions::default().with_delimiter(b'\t'))?;
//! ```

mod csv;
mod error;
mod infer;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use self::csv::{load, load_reader, load_with_options, normalize_headers};

// === Options & Inference ===
pub use infer::infer_cell;
pub use options::{DEFAULT_MISSING_TOKENS, LoadOptions};
