use crate::domain::features::{FeatureSet, features_to_vector};
use serde::{Deserialize, Serialize};

/// Outbound payload for `POST /predict_customer_value`.
/// Built once per submission and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRequest {
    pub customer_id: String,
    pub features: Vec<f64>,
}

impl PredictionRequest {
    pub fn new(customer_id: &str, features: &FeatureSet) -> Self {
        Self {
            customer_id: customer_id.trim().to_string(),
            features: features_to_vector(features),
        }
    }
}

/// Response body from the prediction service. Opaque to the renderer;
/// only formatting and classification are applied on top of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub customer_id: String,
    pub predicted_future_spend_30d: f64,
    pub purchase_probability_30d: f64,
    pub customer_segment: String,
    pub insight: String,
    pub recommended_action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_features_positionally() {
        let request = PredictionRequest::new(" 13085 ", &FeatureSet::default());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["customer_id"], "13085");
        let features = json["features"].as_array().unwrap();
        assert_eq!(features.len(), 6);
        assert_eq!(features[0].as_f64().unwrap(), 345.7);
        assert_eq!(features[5].as_f64().unwrap(), 4.0);
    }

    #[test]
    fn test_result_deserializes_service_shape() {
        let body = r#"{
            "customer_id": "13085",
            "predicted_future_spend_30d": 512.4,
            "purchase_probability_30d": 0.83,
            "customer_segment": "High Value",
            "insight": "Frequent recent buyer with strong basket size.",
            "recommended_action": "Offer a loyalty reward within 7 days."
        }"#;

        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.customer_id, "13085");
        assert_eq!(result.purchase_probability_30d, 0.83);
        assert_eq!(result.customer_segment, "High Value");
    }
}
