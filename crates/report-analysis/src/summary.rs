use std::collections::HashMap;

use report_model::{CellValue, Column, SummaryMetrics, Table};
use tracing::{debug, warn};

use crate::options::AnalysisOptions;

/// Analyze a table using the default `Revenue` / `Product` columns.
pub fn analyze(table: &Table) -> SummaryMetrics {
    analyze_with(table, &AnalysisOptions::default())
}

/// Analyze a table with explicit column names.
pub fn analyze_with(table: &Table, options: &AnalysisOptions) -> SummaryMetrics {
    let record_count = table.row_count();
    let revenue = revenue_column(table, &options.revenue_column);

    let total_revenue = revenue.map_or(0.0, |column| {
        column.cells.iter().filter_map(CellValue::as_number).sum()
    });
    let average_revenue = if record_count > 0 {
        total_revenue / record_count as f64
    } else {
        0.0
    };
    let top_product = match (revenue, table.column(&options.product_column)) {
        (Some(revenue), Some(product)) => top_product(product, revenue),
        _ => None,
    }
    .unwrap_or_else(|| SummaryMetrics::NOT_AVAILABLE.to_string());

    let metrics = SummaryMetrics {
        record_count,
        column_count: table.column_count(),
        total_revenue,
        average_revenue,
        top_product,
        missing_value_count: table.missing_count(),
    };
    debug!(
        records = metrics.record_count,
        columns = metrics.column_count,
        total_revenue = metrics.total_revenue,
        top_product = %metrics.top_product,
        missing = metrics.missing_value_count,
        "analysis complete"
    );
    metrics
}

fn revenue_column<'a>(table: &'a Table, name: &str) -> Option<&'a Column> {
    let column = table.column(name)?;
    if column.is_numeric() {
        Some(column)
    } else {
        warn!(column = name, "revenue column is not numeric; revenue metrics default to 0");
        None
    }
}

/// Product with the largest summed revenue.
///
/// Groups keep first-seen order so a tie resolves to the product that appears
/// first in the table. Rows with a missing product are skipped; missing
/// revenue counts as 0. Returns `None` when no row has a product.
pub fn top_product(product: &Column, revenue: &Column) -> Option<String> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, f64)> = Vec::new();
    for (key, amount) in product.cells.iter().zip(&revenue.cells) {
        if key.is_missing() {
            continue;
        }
        let key = key.to_string();
        let amount = amount.as_number().unwrap_or(0.0);
        match index.get(&key) {
            Some(&slot) => groups[slot].1 += amount,
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, amount));
            }
        }
    }

    let mut best: Option<&(String, f64)> = None;
    for group in &groups {
        if best.is_none_or(|current| group.1 > current.1) {
            best = Some(group);
        }
    }
    best.map(|(name, _)| name.clone())
}
