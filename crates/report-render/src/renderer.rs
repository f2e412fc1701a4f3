use std::io::Write;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use report_model::{SummaryMetrics, Table};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::document::Report;
use crate::error::{RenderError, Result};
use crate::layout::{PageWriter, excerpt, executive_summary};
use crate::style::ReportStyle;

/// Timestamp format shown under the title on every page.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Lays out and serializes the summary report.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: ReportStyle,
}

impl Renderer {
    pub fn new(style: ReportStyle) -> Self {
        Self { style }
    }

    /// Render to PDF bytes, stamped with the current local time.
    pub fn render(&self, table: &Table, metrics: &SummaryMetrics) -> Result<Vec<u8>> {
        self.render_at(table, metrics, Local::now().naive_local())
    }

    /// Render to PDF bytes with an explicit generation time.
    pub fn render_at(
        &self,
        table: &Table,
        metrics: &SummaryMetrics,
        generated_at: NaiveDateTime,
    ) -> Result<Vec<u8>> {
        self.style.validate()?;
        let report = self.layout(table, metrics, generated_at);
        let bytes = report.to_pdf()?;
        debug!(pages = report.page_count(), bytes = bytes.len(), "rendered report");
        Ok(bytes)
    }

    /// Lay out the report: summary on page 1, the excerpt from page 2.
    ///
    /// `generated_at` is formatted once and repeated in every page header.
    pub fn layout(
        &self,
        table: &Table,
        metrics: &SummaryMetrics,
        generated_at: NaiveDateTime,
    ) -> Report {
        let stamp = format!("Generated: {}", generated_at.format(TIMESTAMP_FORMAT));
        let mut writer = PageWriter::new(&self.style, stamp);
        writer.add_page();
        executive_summary(&mut writer, metrics);
        writer.add_page();
        excerpt(&mut writer, table);
        debug!(pages = writer.page_count(), "layout complete");
        writer.finish()
    }

    /// Render and write the report to `path`, returning the bytes written.
    ///
    /// The document goes to a temporary file next to `path` and is renamed
    /// into place, so a failure never leaves a partial file behind.
    pub fn write_to_path(
        &self,
        table: &Table,
        metrics: &SummaryMetrics,
        path: &Path,
    ) -> Result<usize> {
        let bytes = self.render(table, metrics)?;
        write_atomic(path, &bytes)?;
        Ok(bytes.len())
    }
}

/// Render with the default style.
pub fn render(table: &Table, metrics: &SummaryMetrics) -> Result<Vec<u8>> {
    Renderer::default().render(table, metrics)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_error = |source: std::io::Error| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(bytes).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
