use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use report_cli::pipeline::ReportOutcome;
use report_model::SummaryMetrics;
use report_render::{format_count, format_currency};

pub fn print_summary(outcome: &ReportOutcome) {
    println!("{}", summary_table(&outcome.metrics, &outcome.currency_symbol));
    if let Some(path) = &outcome.summary_json {
        println!("Summary JSON: {}", path.display());
    }
}

fn summary_table(metrics: &SummaryMetrics, currency_symbol: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![header_cell("Metric"), header_cell("Value")]);

    table.add_row(vec![
        Cell::new("Records"),
        Cell::new(format_count(metrics.record_count)),
    ]);
    table.add_row(vec![
        Cell::new("Columns"),
        Cell::new(format_count(metrics.column_count)),
    ]);
    table.add_row(vec![
        Cell::new("Total Revenue"),
        Cell::new(format_currency(metrics.total_revenue, currency_symbol)),
    ]);
    table.add_row(vec![
        Cell::new("Avg Revenue"),
        Cell::new(format_currency(metrics.average_revenue, currency_symbol)),
    ]);
    let top_product = if metrics.has_top_product() {
        Cell::new(&metrics.top_product).fg(Color::Green)
    } else {
        dim_cell(&metrics.top_product)
    };
    table.add_row(vec![Cell::new("Top Product"), top_product]);
    let missing = Cell::new(format_count(metrics.missing_value_count));
    let missing = if metrics.missing_value_count > 0 {
        missing.fg(Color::Yellow)
    } else {
        missing
    };
    table.add_row(vec![Cell::new("Missing Values"), missing]);

    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
