//! Best-effort cell type inference.

use chrono::NaiveDate;
use report_model::CellValue;

use crate::options::LoadOptions;

/// Only ISO dates, whose display form matches the source text.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Classify a raw field: missing token, then number, then date, else text.
pub fn infer_cell(raw: &str, options: &LoadOptions) -> CellValue {
    let value = raw.trim();
    if options.is_missing_token(value) {
        return CellValue::Missing;
    }
    if let Ok(number) = value.parse::<f64>()
        && number.is_finite()
    {
        return CellValue::Number(number);
    }
    if let Some(date) = parse_date(value) {
        return CellValue::Date(date);
    }
    CellValue::Text(value.to_string())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    // Cheap shape check before trying chrono: YYYY-.
    let bytes = value.as_bytes();
    if bytes.len() < 8 || !bytes[..4].iter().all(u8::is_ascii_digit) || bytes[4] != b'-' {
        return None;
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).ok()?;
    // Unpadded forms like 2025-1-5 would display differently.
    (date.format(DATE_FORMAT).to_string() == value).then_some(date)
}
