use crate::domain::errors::PredictionError;
use crate::domain::features::FeatureSet;
use crate::domain::ports::{PredictionOutcome, PredictionService};
use crate::domain::prediction::{PredictionRequest, PredictionResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

// ===== Prediction Service (REST API) =====

/// JSON body the service sends on non-2xx responses. `detail` may also be
/// a structured object, in which case the parse fails and we fall back to
/// the HTTP status phrase.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    detail: Option<String>,
}

pub struct ApiPredictionService {
    client: Client,
    base_url: String,
}

impl ApiPredictionService {
    pub fn new(base_url: String) -> Self {
        // No request timeout here: each submission is at-most-once and any
        // timeout is left to the platform default.
        let client = Client::builder()
            .pool_max_idle_per_host(2)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }
}

/// Picks the user-facing message for a failed response: the service's own
/// `detail` string when present, otherwise the HTTP status phrase.
fn service_detail(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ServiceErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Prediction request failed")
                .to_string()
        })
}

#[async_trait]
impl PredictionService for ApiPredictionService {
    async fn predict(&self, customer_id: &str, features: &FeatureSet) -> PredictionOutcome {
        let url = format!("{}/predict_customer_value", self.base_url);
        let request = PredictionRequest::new(customer_id, features);
        debug!("POST {} for customer {}", url, request.customer_id);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Prediction request failed in transit: {}", e);
                PredictionError::Transport {
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = service_detail(status, &body);
            warn!("Prediction service rejected request ({}): {}", status, detail);
            return Err(PredictionError::Service { detail });
        }

        response.json::<PredictionResult>().await.map_err(|e| {
            warn!("Prediction response could not be decoded: {}", e);
            PredictionError::MalformedResponse
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_detail_prefers_body_detail() {
        let body = r#"{"detail": "Expected 6 features"}"#;
        let msg = service_detail(StatusCode::BAD_REQUEST, body);
        assert_eq!(msg, "Expected 6 features");
    }

    #[test]
    fn test_service_detail_falls_back_to_status_phrase() {
        assert_eq!(
            service_detail(StatusCode::BAD_GATEWAY, "{}"),
            "Bad Gateway"
        );
        assert_eq!(
            service_detail(StatusCode::INTERNAL_SERVER_ERROR, "not json"),
            "Internal Server Error"
        );
    }

    #[test]
    fn test_service_detail_ignores_structured_detail() {
        // FastAPI-style services sometimes nest an object under `detail`.
        let body = r#"{"detail": {"error": "Invalid JSON from LLM"}}"#;
        let msg = service_detail(StatusCode::BAD_GATEWAY, body);
        assert_eq!(msg, "Bad Gateway");
    }
}
