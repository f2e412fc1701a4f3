//! Summary statistics for the report pipeline.
//!
//! [`analyze`] turns a [`report_model::Table`] into a fixed-shape
//! [`report_model::SummaryMetrics`]. Analysis never fails: absent columns and
//! empty tables degrade to zero or the `"N/A"` sentinel.

mod options;
mod summary;

pub use options::AnalysisOptions;
pub use summary::{analyze, analyze_with, top_product};
