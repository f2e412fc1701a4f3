//! Header row normalization.

use std::collections::BTreeSet;

use tracing::warn;

/// Normalize a raw header row into unique column names.
///
/// Names are trimmed and stripped of a UTF-8 BOM. Empty names become
/// `Unnamed: <index>` and repeated names get a `.1`, `.2`, ... suffix.
pub fn normalize_headers<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = BTreeSet::new();
    let mut headers = Vec::new();
    for (index, value) in raw.into_iter().enumerate() {
        let trimmed = value.trim_matches('\u{feff}').trim();
        let base = if trimmed.is_empty() {
            format!("Unnamed: {index}")
        } else {
            trimmed.to_string()
        };
        let mut name = base.clone();
        let mut suffix = 0usize;
        while seen.contains(&name) {
            suffix += 1;
            name = format!("{base}.{suffix}");
        }
        if suffix > 0 {
            warn!(column = %base, renamed = %name, "duplicate column name");
        }
        seen.insert(name.clone());
        headers.push(name);
    }
    headers
}
