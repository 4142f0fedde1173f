use crate::domain::errors::PredictionError;
use crate::domain::features::FeatureSet;
use crate::domain::prediction::PredictionResult;
use async_trait::async_trait;

/// Outcome of a single prediction call.
pub type PredictionOutcome = Result<PredictionResult, PredictionError>;

/// Port to whatever answers `POST /predict_customer_value`: the live HTTP
/// service in production, a deterministic mock offline and in tests.
///
/// Implementations are stateless between invocations. Each call is an
/// independent, at-most-once request: no retry, no caching.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, customer_id: &str, features: &FeatureSet) -> PredictionOutcome;
}
