//! Paginated PDF rendering for the report pipeline.
//!
//! The renderer works in two steps:
//!
//! 1. **Layout** ([`Renderer::layout`]): builds a [`Report`], a list of pages
//!    holding positioned text and rectangles. Every page carries the same
//!    title, generation timestamp and a page-number footer.
//! 2. **Serialization** ([`Report::to_pdf`]): encodes the pages with `lopdf`
//!    using the standard Helvetica fonts.
//!
//! All visual constants come from [`ReportStyle`].

mod document;
mod error;
mod fonts;
mod format;
mod layout;
mod pdf;
mod renderer;
mod style;

pub use document::{DrawItem, DrawOp, Font, Page, Report, Role};
pub use error::{RenderError, Result};
pub use format::{format_count, format_currency, summary_lines, truncate_cell};
pub use renderer::{Renderer, TIMESTAMP_FORMAT, render};
pub use style::{ReportStyle, Rgb};
