use crate::domain::errors::PredictionError;
use crate::domain::features::FeatureSet;
use crate::domain::ports::{PredictionOutcome, PredictionService};
use crate::domain::prediction::PredictionResult;
use async_trait::async_trait;
use tracing::info;

/// Local stand-in for the prediction service. Lets the dashboard run
/// offline (`MODE=mock`) and gives tests deterministic outcomes.
///
/// The default behavior reproduces the service's recency/frequency
/// probability heuristic; `with_response` / `failing` script a fixed
/// outcome instead.
#[derive(Clone, Default)]
pub struct MockPredictionService {
    scripted: Option<Result<PredictionResult, PredictionError>>,
}

impl MockPredictionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answers with the given result.
    pub fn with_response(result: PredictionResult) -> Self {
        Self {
            scripted: Some(Ok(result)),
        }
    }

    /// Always fails with the given error.
    pub fn failing(error: PredictionError) -> Self {
        Self {
            scripted: Some(Err(error)),
        }
    }

    /// Heuristic purchase probability: recency-weighted with a frequency
    /// kicker, clamped to [0.05, 0.95] and rounded to two decimals.
    fn probability(features: &FeatureSet) -> f64 {
        let freq_score = (features.num_transactions / 10.0).min(1.0);
        let recency_score = (1.0 - features.recency_days / 45.0).max(0.0);
        let probability = 0.6 * recency_score + 0.4 * freq_score;
        (probability.clamp(0.05, 0.95) * 100.0).round() / 100.0
    }

    fn segment(probability: f64) -> &'static str {
        if probability > 0.7 {
            "High Value"
        } else if probability > 0.4 {
            "Medium Value"
        } else {
            "Low Value"
        }
    }
}

#[async_trait]
impl PredictionService for MockPredictionService {
    async fn predict(&self, customer_id: &str, features: &FeatureSet) -> PredictionOutcome {
        if let Some(outcome) = &self.scripted {
            return outcome.clone();
        }

        let probability = Self::probability(features);
        // Expected 30d spend as the probability-weighted share of history.
        let predicted_spend = (features.total_spend * probability * 100.0).round() / 100.0;
        let segment = Self::segment(probability);

        info!(
            "Mock prediction for {}: spend {:.2}, probability {:.2}",
            customer_id, predicted_spend, probability
        );

        Ok(PredictionResult {
            customer_id: customer_id.trim().to_string(),
            predicted_future_spend_30d: predicted_spend,
            purchase_probability_30d: probability,
            customer_segment: segment.to_string(),
            insight: format!(
                "Customer last purchased {} days ago across {} transactions; \
                 projected to remain a {} customer over the next 30 days.",
                features.recency_days, features.num_transactions, segment
            ),
            recommended_action: match Self::segment(probability) {
                "High Value" => "Prioritize for the loyalty program and early access offers.",
                "Medium Value" => "Send a targeted cross-sell campaign within two weeks.",
                _ => "Re-engage with a win-back discount before churn sets in.",
            }
            .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_heuristic_probability_stays_in_bounds() {
        let service = MockPredictionService::new();

        let cold = FeatureSet {
            num_transactions: 0.0,
            recency_days: 400.0,
            ..FeatureSet::default()
        };
        let hot = FeatureSet {
            num_transactions: 50.0,
            recency_days: 0.0,
            ..FeatureSet::default()
        };

        let low = service.predict("c1", &cold).await.unwrap();
        let high = service.predict("c2", &hot).await.unwrap();
        assert_eq!(low.purchase_probability_30d, 0.05);
        assert_eq!(high.purchase_probability_30d, 0.95);
    }

    #[tokio::test]
    async fn test_default_profile_is_high_value() {
        let service = MockPredictionService::new();
        let result = service.predict("13085", &FeatureSet::default()).await.unwrap();

        // recency 4d, 7 transactions -> 0.6 * (1 - 4/45) + 0.4 * 0.7 = 0.83
        assert_eq!(result.purchase_probability_30d, 0.83);
        assert_eq!(result.customer_segment, "High Value");
    }

    #[tokio::test]
    async fn test_scripted_failure_is_returned() {
        let service = MockPredictionService::failing(PredictionError::Service {
            detail: "Expected 6 features".to_string(),
        });
        let err = service
            .predict("13085", &FeatureSet::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Expected 6 features");
    }
}
