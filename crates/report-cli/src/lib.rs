//! Library half of the `csv-report` binary: logging setup and the
//! load → analyze → render pipeline.

pub mod logging;
pub mod pipeline;
