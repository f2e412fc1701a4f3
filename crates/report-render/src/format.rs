//! Text formatting for summary lines and excerpt cells.

use report_model::SummaryMetrics;

/// Insert `,` every three digits of an unsigned digit string.
fn group_thousands(digits: &str) -> String {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1234567` → `1,234,567`.
pub fn format_count(value: usize) -> String {
    group_thousands(&value.to_string())
}

/// `1234.567` → `$1,234.57`; negative amounts become `-$1,234.57`.
///
/// Infinite or NaN amounts (an overflowing sum) render as `N/A`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return SummaryMetrics::NOT_AVAILABLE.to_string();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{symbol}{}.{cents}", group_thousands(whole))
}

/// The six executive-summary lines, in display order.
pub fn summary_lines(metrics: &SummaryMetrics, currency_symbol: &str) -> Vec<String> {
    vec![
        format!("Records: {}", format_count(metrics.record_count)),
        format!("Columns: {}", format_count(metrics.column_count)),
        format!(
            "Total Revenue: {}",
            format_currency(metrics.total_revenue, currency_symbol)
        ),
        format!(
            "Avg Revenue: {}",
            format_currency(metrics.average_revenue, currency_symbol)
        ),
        format!("Top Product: {}", metrics.top_product),
        format!(
            "Missing Values: {}",
            format_count(metrics.missing_value_count)
        ),
    ]
}

/// Cut `text` to at most `limit` characters, ending with `marker` when cut.
pub fn truncate_cell(text: &str, limit: usize, marker: Option<&str>) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let marker = marker.unwrap_or("");
    let marker_len = marker.chars().count();
    if marker_len >= limit {
        return text.chars().take(limit).collect();
    }
    let mut out: String = text.chars().take(limit - marker_len).collect();
    out.push_str(marker);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_use_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(216.666_666, "$"), "$216.67");
        assert_eq!(format_currency(1_234_567.891, "$"), "$1,234,567.89");
        assert_eq!(format_currency(-1_234.5, "$"), "-$1,234.50");
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
        assert_eq!(format_currency(999.999, "€"), "€1,000.00");
    }

    #[test]
    fn overflowing_amounts_are_not_available() {
        assert_eq!(format_currency(f64::INFINITY, "$"), "N/A");
        assert_eq!(format_currency(f64::NEG_INFINITY, "$"), "N/A");
        assert_eq!(format_currency(f64::NAN, "$"), "N/A");

        let overflowed = [1e308, 1e308, -1e308].iter().sum::<f64>();
        let metrics = SummaryMetrics {
            total_revenue: overflowed,
            average_revenue: overflowed / 3.0,
            ..SummaryMetrics::default()
        };
        let lines = summary_lines(&metrics, "$");
        assert_eq!(lines[2], "Total Revenue: N/A");
        assert_eq!(lines[3], "Avg Revenue: N/A");
    }

    #[test]
    fn truncation_by_characters() {
        assert_eq!(truncate_cell("short", 15, None), "short");
        assert_eq!(truncate_cell("1799.9812345678901", 15, None), "1799.9812345678");
        assert_eq!(truncate_cell("abcdefghij", 5, Some("...")), "ab...");
        assert_eq!(truncate_cell("abcdefghij", 2, Some("...")), "ab");
        assert_eq!(truncate_cell("héllo wörld", 5, None), "héllo");
    }

    #[test]
    fn summary_lines_in_fixed_order() {
        let metrics = SummaryMetrics {
            record_count: 1_500,
            column_count: 6,
            total_revenue: 650.0,
            average_revenue: 650.0 / 3.0,
            top_product: "Laptop".to_string(),
            missing_value_count: 2,
        };
        insta::assert_snapshot!(summary_lines(&metrics, "$").join("\n"), @r"
        Records: 1,500
        Columns: 6
        Total Revenue: $650.00
        Avg Revenue: $216.67
        Top Product: Laptop
        Missing Values: 2
        ");
    }
}
