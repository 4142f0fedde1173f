use serde::{Deserialize, Serialize};

/// Ordered list of feature names.
/// This order MUST match exactly the order the prediction service was
/// trained against. Any change here is a breaking change for the wire
/// contract.
pub const FEATURE_NAMES: &[&str] = &[
    "total_spend",
    "avg_spend",
    "num_transactions",
    "total_units",
    "unique_products",
    "recency_days",
];

/// Named numeric inputs derived from a customer's transaction history.
/// Counts are carried as f64 so a single parse path covers every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub total_spend: f64,
    pub avg_spend: f64,
    pub num_transactions: f64,
    pub total_units: f64,
    pub unique_products: f64,
    pub recency_days: f64,
}

impl Default for FeatureSet {
    /// The sample customer profile the dashboard starts with.
    fn default() -> Self {
        Self {
            total_spend: 345.7,
            avg_spend: 49.3,
            num_transactions: 7.0,
            total_units: 12.0,
            unique_products: 5.0,
            recency_days: 4.0,
        }
    }
}

/// Converts the named features into the positional vector the service
/// expects. This is the only place the ordering is spelled out; every
/// outbound payload goes through here.
pub fn features_to_vector(fs: &FeatureSet) -> Vec<f64> {
    vec![
        fs.total_spend,
        fs.avg_spend,
        fs.num_transactions,
        fs.total_units,
        fs.unique_products,
        fs.recency_days,
    ]
}

/// Parses a raw form field as f64. Garbage input (including the empty
/// string) coerces to 0.0 rather than surfacing a parse error.
pub fn parse_metric_input(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_length() {
        let fs = FeatureSet::default();
        let vec = features_to_vector(&fs);
        assert_eq!(vec.len(), FEATURE_NAMES.len());
    }

    #[test]
    fn test_feature_vector_order_is_fixed() {
        // Fields assigned in scrambled order still serialize positionally.
        let mut fs = FeatureSet::default();
        fs.recency_days = 4.0;
        fs.total_spend = 345.7;
        fs.unique_products = 5.0;
        fs.avg_spend = 49.3;
        fs.total_units = 12.0;
        fs.num_transactions = 7.0;

        let vec = features_to_vector(&fs);
        assert_eq!(vec, vec![345.7, 49.3, 7.0, 12.0, 5.0, 4.0]);
    }

    #[test]
    fn test_parse_metric_input_coerces_garbage_to_zero() {
        assert_eq!(parse_metric_input(""), 0.0);
        assert_eq!(parse_metric_input("abc"), 0.0);
        assert_eq!(parse_metric_input("12.5.3"), 0.0);
    }

    #[test]
    fn test_parse_metric_input_accepts_numbers() {
        assert_eq!(parse_metric_input("49.3"), 49.3);
        assert_eq!(parse_metric_input("  7 "), 7.0);
        assert_eq!(parse_metric_input("0"), 0.0);
    }
}
