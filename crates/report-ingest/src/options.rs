//! Loader configuration.

/// Tokens treated as missing values, compared after trimming.
pub const DEFAULT_MISSING_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "NULL", "null", "None", "#N/A", "<NA>",
];

/// Options controlling how a delimited source is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter byte (`,` by default).
    pub delimiter: u8,
    /// Cell values that become [`report_model::CellValue::Missing`].
    pub missing_tokens: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing_tokens: DEFAULT_MISSING_TOKENS
                .iter()
                .map(|token| (*token).to_string())
                .collect(),
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_missing_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_missing_token(&self, value: &str) -> bool {
        self.missing_tokens.iter().any(|token| token == value)
    }
}
