use serde::Serialize;

/// Fixed-shape aggregate record produced by analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub record_count: usize,
    pub column_count: usize,
    pub total_revenue: f64,
    pub average_revenue: f64,
    /// Product with the largest summed revenue, or [`SummaryMetrics::NOT_AVAILABLE`].
    pub top_product: String,
    pub missing_value_count: usize,
}

impl SummaryMetrics {
    /// Sentinel used when the top product cannot be determined.
    pub const NOT_AVAILABLE: &'static str = "N/A";

    pub fn has_top_product(&self) -> bool {
        self.top_product != Self::NOT_AVAILABLE
    }
}

impl Default for SummaryMetrics {
    fn default() -> Self {
        Self {
            record_count: 0,
            column_count: 0,
            total_revenue: 0.0,
            average_revenue: 0.0,
            top_product: Self::NOT_AVAILABLE.to_string(),
            missing_value_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_sentinel() {
        let metrics = SummaryMetrics::default();
        assert_eq!(metrics.top_product, "N/A");
        assert!(!metrics.has_top_product());
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let metrics = SummaryMetrics {
            record_count: 3,
            top_product: "Laptop".to_string(),
            ..SummaryMetrics::default()
        };
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["record_count"], 3);
        assert_eq!(json["top_product"], "Laptop");
        assert_eq!(json["total_revenue"], 0.0);
    }
}
