//! The report pipeline: load the CSV, compute metrics, write the PDF.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::{info, info_span, warn};

use report_analysis::{AnalysisOptions, analyze_with};
use report_ingest::{LoadOptions, load_with_options};
use report_model::SummaryMetrics;
use report_render::{Renderer, ReportStyle};

/// Default destination when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "report.pdf";

/// How many data rows the excerpt shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowLimit {
    /// Whatever the style says (10 unless overridden).
    #[default]
    Style,
    Rows(usize),
    All,
}

/// Everything one report run needs.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// TOML file with `ReportStyle` overrides.
    pub style: Option<PathBuf>,
    pub load: LoadOptions,
    pub analysis: AnalysisOptions,
    pub row_limit: RowLimit,
    /// Also write the metrics as pretty JSON here.
    pub summary_json: Option<PathBuf>,
}

impl PipelineOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            style: None,
            load: LoadOptions::default(),
            analysis: AnalysisOptions::default(),
            row_limit: RowLimit::default(),
            summary_json: None,
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub output: PathBuf,
    pub bytes_written: usize,
    pub metrics: SummaryMetrics,
    pub currency_symbol: String,
    pub summary_json: Option<PathBuf>,
}

/// Load the style file (if any) and apply the row limit on top of it.
pub fn resolve_style(style_path: Option<&Path>, row_limit: RowLimit) -> Result<ReportStyle> {
    let mut style = match style_path {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("read style file {}", path.display()))?;
            ReportStyle::from_toml_str(&source)
                .with_context(|| format!("parse style file {}", path.display()))?
        }
        None => ReportStyle::default(),
    };
    match row_limit {
        RowLimit::Style => {}
        RowLimit::Rows(rows) => style.excerpt_row_cap = Some(rows),
        RowLimit::All => style.excerpt_row_cap = None,
    }
    style.validate().context("invalid report style")?;
    Ok(style)
}

/// Run the whole pipeline, printing a progress line per stage.
pub fn generate_report(options: &PipelineOptions) -> Result<ReportOutcome> {
    let span = info_span!("report", input = %options.input.display());
    let _guard = span.enter();

    let style = resolve_style(options.style.as_deref(), options.row_limit)?;
    let currency_symbol = style.currency_symbol.clone();

    println!("Reading data...");
    let start = Instant::now();
    let table = load_with_options(&options.input, &options.load)
        .with_context(|| format!("load {}", options.input.display()))?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        duration_ms = start.elapsed().as_millis(),
        "table loaded"
    );

    println!("Analyzing...");
    let start = Instant::now();
    let metrics = analyze_with(&table, &options.analysis);
    info!(
        records = metrics.record_count,
        top_product = %metrics.top_product,
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );

    // Staged before the PDF so a bad JSON destination fails the run early.
    let staged_json = options
        .summary_json
        .as_deref()
        .map(|path| stage_summary_json(path, &metrics))
        .transpose()?;

    println!("Creating PDF...");
    let start = Instant::now();
    let bytes_written = Renderer::new(style)
        .write_to_path(&table, &metrics, &options.output)
        .with_context(|| format!("write report {}", options.output.display()))?;
    info!(
        output = %options.output.display(),
        bytes = bytes_written,
        duration_ms = start.elapsed().as_millis(),
        "report written"
    );

    if let Some((path, staged)) = staged_json {
        if let Err(error) = staged.persist(path) {
            if let Err(cleanup) = fs::remove_file(&options.output) {
                warn!(output = %options.output.display(), %cleanup, "could not remove report");
            }
            return Err(error.error)
                .with_context(|| format!("write summary json {}", path.display()));
        }
        info!(path = %path.display(), "summary json written");
    }
    println!("Report saved: {}", options.output.display());

    Ok(ReportOutcome {
        output: options.output.clone(),
        bytes_written,
        metrics,
        currency_symbol,
        summary_json: options.summary_json.clone(),
    })
}

/// Serialize the metrics into a temp file next to `path`, ready to persist.
fn stage_summary_json<'a>(
    path: &'a Path,
    metrics: &SummaryMetrics,
) -> Result<(&'a Path, NamedTempFile)> {
    let context = || format!("write summary json {}", path.display());
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).with_context(context)?;
    serde_json::to_writer_pretty(&mut file, metrics).context("serialize summary metrics")?;
    file.flush().with_context(context)?;
    Ok((path, file))
}
