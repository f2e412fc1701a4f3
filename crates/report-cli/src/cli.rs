//! CLI argument definitions for `csv-report`.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use report_analysis::AnalysisOptions;
use report_ingest::LoadOptions;
use report_cli::pipeline::{DEFAULT_OUTPUT, PipelineOptions, RowLimit};

#[derive(Parser)]
#[command(
    name = "csv-report",
    version,
    about = "Summarize a CSV file into a paginated PDF report",
    long_about = "Load a CSV file, compute summary metrics (record and column counts,\n\
                  revenue totals, top product, missing values) and write a PDF with an\n\
                  executive summary page followed by a sample of the data."
)]
pub struct Cli {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReportArgs {
    /// CSV file to summarize.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination PDF.
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// TOML file overriding report colors, fonts, margins and text.
    #[arg(long = "style", value_name = "STYLE.toml")]
    pub style: Option<PathBuf>,

    /// Field delimiter (a single ASCII character).
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Column summed into total and average revenue.
    #[arg(long = "revenue-column", value_name = "NAME", default_value = "Revenue")]
    pub revenue_column: String,

    /// Column grouped to find the top product.
    #[arg(long = "product-column", value_name = "NAME", default_value = "Product")]
    pub product_column: String,

    /// Number of data rows in the sample table (default 10).
    #[arg(long = "max-rows", value_name = "N", conflicts_with = "all_rows")]
    pub max_rows: Option<usize>,

    /// Include every data row in the sample table.
    #[arg(long = "all-rows")]
    pub all_rows: bool,

    /// Also write the summary metrics as JSON.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Do not print the summary table after saving.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

impl ReportArgs {
    pub fn pipeline_options(&self) -> PipelineOptions {
        let row_limit = match (self.max_rows, self.all_rows) {
            (_, true) => RowLimit::All,
            (Some(rows), false) => RowLimit::Rows(rows),
            (None, false) => RowLimit::Style,
        };
        PipelineOptions {
            input: self.input.clone(),
            output: self.output.clone(),
            style: self.style.clone(),
            load: LoadOptions::default().with_delimiter(self.delimiter),
            analysis: AnalysisOptions::default()
                .with_revenue_column(&self.revenue_column)
                .with_product_column(&self.product_column),
            row_limit,
            summary_json: self.summary_json.clone(),
        }
    }
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let value = match value {
        "\\t" | "tab" => "\t",
        other => other,
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
        _ => Err(format!("expected a single ASCII character, got {value:?}")),
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("csv-report").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cli = parse(&["sales.csv"]).unwrap();
        let options = cli.report.pipeline_options();

        assert_eq!(options.input, PathBuf::from("sales.csv"));
        assert_eq!(options.output, PathBuf::from("report.pdf"));
        assert_eq!(options.load.delimiter, b',');
        assert_eq!(options.analysis, AnalysisOptions::default());
        assert_eq!(options.row_limit, RowLimit::Style);
    }

    #[test]
    fn report_flags() {
        let cli = parse(&[
            "sales.tsv",
            "-o",
            "out/q1.pdf",
            "--delimiter",
            "tab",
            "--revenue-column",
            "Amount",
            "--max-rows",
            "25",
        ])
        .unwrap();
        let options = cli.report.pipeline_options();

        assert_eq!(options.output, PathBuf::from("out/q1.pdf"));
        assert_eq!(options.load.delimiter, b'\t');
        assert_eq!(options.analysis.revenue_column, "Amount");
        assert_eq!(options.analysis.product_column, "Product");
        assert_eq!(options.row_limit, RowLimit::Rows(25));
    }

    #[test]
    fn max_rows_conflicts_with_all_rows() {
        assert!(parse(&["sales.csv", "--max-rows", "5", "--all-rows"]).is_err());
        let cli = parse(&["sales.csv", "--all-rows"]).unwrap();
        assert_eq!(cli.report.pipeline_options().row_limit, RowLimit::All);
    }

    #[test]
    fn delimiter_must_be_one_ascii_character() {
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("§").is_err());
    }
}
