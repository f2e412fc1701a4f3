/// Column names that drive the conditional metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Numeric column summed into total and average revenue.
    pub revenue_column: String,
    /// Categorical column grouped to find the top product.
    pub product_column: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            revenue_column: "Revenue".to_string(),
            product_column: "Product".to_string(),
        }
    }
}

impl AnalysisOptions {
    #[must_use]
    pub fn with_revenue_column(mut self, name: impl Into<String>) -> Self {
        self.revenue_column = name.into();
        self
    }

    #[must_use]
    pub fn with_product_column(mut self, name: impl Into<String>) -> Self {
        self.product_column = name.into();
        self
    }
}
