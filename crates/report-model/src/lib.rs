//! Shared data model for the report pipeline.
//!
//! - [`Table`]: column-oriented, immutable view of a parsed source
//! - [`CellValue`]: tagged cell kind (number, text, date, missing)
//! - [`SummaryMetrics`]: aggregate record consumed by the renderer

#![deny(unsafe_code)]

pub mod error;
pub mod metrics;
pub mod table;

pub use error::{Result, TableError};
pub use metrics::SummaryMetrics;
pub use table::{CellValue, Column, Table};
