//! CSV reading utilities.

mod header;
mod reader;

pub use header::normalize_headers;
pub use reader::{load, load_reader, load_with_options};
