//! Layout and output tests for the report renderer.

use std::fs;

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use report_model::{CellValue, Column, SummaryMetrics, Table};
use report_render::{RenderError, Renderer, ReportStyle, Role, render};

fn stamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 4)
        .unwrap()
        .and_hms_opt(9, 5, 42)
        .unwrap()
}

fn sales_table(rows: usize) -> Table {
    let products = ["Laptop", "Mouse", "Keyboard", "Monitor"];
    Table::from_columns(vec![
        Column::new(
            "Product",
            (0..rows)
                .map(|i| CellValue::Text(products[i % products.len()].to_string()))
                .collect(),
        ),
        Column::new(
            "Revenue",
            (0..rows).map(|i| CellValue::Number(100.0 + i as f64)).collect(),
        ),
        Column::new(
            "Region",
            (0..rows)
                .map(|i| {
                    if i % 5 == 0 {
                        CellValue::Missing
                    } else {
                        CellValue::Text("North".to_string())
                    }
                })
                .collect(),
        ),
    ])
    .unwrap()
}

fn metrics() -> SummaryMetrics {
    SummaryMetrics {
        record_count: 3,
        column_count: 2,
        total_revenue: 650.0,
        average_revenue: 650.0 / 3.0,
        top_product: "Laptop".to_string(),
        missing_value_count: 0,
    }
}

fn uncapped() -> Renderer {
    Renderer::new(ReportStyle {
        excerpt_row_cap: None,
        ..ReportStyle::default()
    })
}

#[test]
fn summary_page_lists_six_metrics() {
    let report = Renderer::default().layout(&sales_table(3), &metrics(), stamp());
    let page = &report.pages[0];

    let body = page.texts(|role| matches!(role, Role::Heading | Role::SummaryLine));
    insta::assert_snapshot!(body.join("\n"), @r"
    Executive Summary
    Records: 3
    Columns: 2
    Total Revenue: $650.00
    Avg Revenue: $216.67
    Top Product: Laptop
    Missing Values: 0
    ");
    assert!(page.texts(|role| matches!(role, Role::Cell { .. })).is_empty());
}

#[test]
fn excerpt_starts_on_page_two() {
    let report = Renderer::default().layout(&sales_table(3), &metrics(), stamp());

    assert_eq!(report.page_count(), 2);
    let page = &report.pages[1];
    assert_eq!(
        page.texts(|role| role == Role::Heading),
        vec!["Sample Data (First 10 Records)"]
    );
    assert_eq!(
        page.texts(|role| matches!(role, Role::ColumnHeader { .. })),
        vec!["Product", "Revenue", "Region"]
    );
    assert_eq!(report.excerpt_rows(), vec![0, 1, 2]);
}

#[test]
fn excerpt_is_capped_at_ten_rows_in_order() {
    let report = Renderer::default().layout(&sales_table(25), &metrics(), stamp());

    assert_eq!(report.excerpt_rows(), (0..10).collect::<Vec<_>>());
    let first_column: Vec<&str> =
        report.texts(|role| matches!(role, Role::Cell { column: 0, .. }));
    assert_eq!(first_column[..4], ["Laptop", "Mouse", "Keyboard", "Monitor"]);
}

#[test]
fn every_page_has_header_and_footer() {
    let report = uncapped().layout(&sales_table(60), &metrics(), stamp());

    assert_eq!(report.page_count(), 4);
    for (index, page) in report.pages.iter().enumerate() {
        assert_eq!(page.number, index + 1);
        assert_eq!(page.texts(|role| role == Role::Title), vec!["Data Analysis Report"]);
        assert_eq!(
            page.texts(|role| role == Role::Timestamp),
            vec!["Generated: 2025-03-04 09:05"]
        );
        let footer = format!("Page {}", index + 1);
        assert_eq!(page.texts(|role| role == Role::Footer), vec![footer.as_str()]);
    }
}

#[test]
fn continued_table_repeats_column_headers() {
    let report = uncapped().layout(&sales_table(60), &metrics(), stamp());

    assert_eq!(report.excerpt_rows(), (0..60).collect::<Vec<_>>());
    for page in &report.pages[1..] {
        let headers = page.texts(|role| matches!(role, Role::ColumnHeader { .. }));
        assert_eq!(headers, vec!["Product", "Revenue", "Region"]);
    }
}

#[test]
fn rows_taller_than_a_page_still_terminate() {
    let renderer = Renderer::new(ReportStyle {
        row_height: 400.0,
        ..ReportStyle::default()
    });
    let report = renderer.layout(&sales_table(2), &metrics(), stamp());

    assert_eq!(report.excerpt_rows(), vec![0, 1]);
}

#[test]
fn column_headers_are_never_left_without_rows() {
    let table = Table::from_columns(vec![Column::new(
        "A",
        (0..5).map(|i| CellValue::Number(i as f64)).collect(),
    )])
    .unwrap();
    let renderer = Renderer::new(ReportStyle {
        margin_bottom: 235.0,
        ..ReportStyle::default()
    });

    let report = renderer.layout(&table, &metrics(), stamp());

    assert_eq!(report.excerpt_rows(), (0..5).collect::<Vec<_>>());
    for page in &report.pages {
        let headers = page.texts(|role| matches!(role, Role::ColumnHeader { .. }));
        let cells = page.texts(|role| matches!(role, Role::Cell { .. }));
        assert!(
            headers.is_empty() || !cells.is_empty(),
            "page {} has a header band but no rows",
            page.number
        );
    }
}

#[test]
fn cells_are_truncated_to_fifteen_characters() {
    let table = Table::from_columns(vec![Column::new(
        "Note",
        vec![CellValue::Text("a description that runs long".to_string())],
    )])
    .unwrap();
    let report = Renderer::default().layout(&table, &metrics(), stamp());

    assert_eq!(
        report.texts(|role| matches!(role, Role::Cell { .. })),
        vec!["a description t"]
    );
}

#[test]
fn missing_cells_draw_a_border_but_no_text() {
    let report = Renderer::default().layout(&sales_table(1), &metrics(), stamp());
    let region_items = report.pages[1]
        .items
        .iter()
        .filter(|item| item.role == Role::Cell { row: 0, column: 2 })
        .count();

    assert_eq!(region_items, 1);
}

#[test]
fn table_without_columns_renders_heading_only() {
    let table = Table::from_columns(Vec::new()).unwrap();
    let report = Renderer::default().layout(&table, &SummaryMetrics::default(), stamp());

    assert_eq!(report.page_count(), 2);
    assert!(report.excerpt_rows().is_empty());
    assert_eq!(
        report.pages[1].texts(|role| role == Role::Heading),
        vec!["Sample Data (First 10 Records)"]
    );
}

#[test]
fn rendered_bytes_are_a_pdf_with_matching_pages() {
    let renderer = uncapped();
    let table = sales_table(60);
    let bytes = renderer.render_at(&table, &metrics(), stamp()).unwrap();

    let doc = lopdf::Document::load_mem(&bytes).expect("parse rendered pdf");
    assert_eq!(doc.get_pages().len(), 4);
}

#[test]
fn default_render_produces_summary_and_excerpt_pages() {
    let bytes = render(&sales_table(3), &metrics()).unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    let doc = lopdf::Document::load_mem(&bytes).expect("parse rendered pdf");
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn invalid_style_is_rejected_before_rendering() {
    let renderer = Renderer::new(ReportStyle {
        cell_char_limit: 0,
        ..ReportStyle::default()
    });
    let result = renderer.render_at(&sales_table(1), &metrics(), stamp());

    assert!(matches!(result, Err(RenderError::InvalidStyle { .. })));
}

#[test]
fn write_to_path_produces_a_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");

    let written = Renderer::default()
        .write_to_path(&sales_table(3), &metrics(), &path)
        .unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), written);
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn unwritable_destination_leaves_nothing_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.pdf");

    let result = Renderer::default().write_to_path(&sales_table(3), &metrics(), &path);

    assert!(matches!(result, Err(RenderError::Write { .. })));
    assert!(!path.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

proptest! {
    #[test]
    fn excerpt_row_count_is_min_of_cap_and_records(rows in 0usize..40) {
        let report = Renderer::default().layout(&sales_table(rows), &metrics(), stamp());
        prop_assert_eq!(report.excerpt_rows(), (0..rows.min(10)).collect::<Vec<_>>());
    }
}
