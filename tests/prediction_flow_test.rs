use std::sync::Arc;
use std::time::Duration;
use valuescope::application::agent::DashboardAgent;
use valuescope::application::client::SystemClient;
use valuescope::application::system::Application;
use valuescope::domain::errors::PredictionError;
use valuescope::domain::features::FeatureSet;
use valuescope::domain::ports::{PredictionOutcome, PredictionService};
use valuescope::domain::prediction::PredictionResult;
use valuescope::infrastructure::mock::MockPredictionService;
use valuescope::infrastructure::prediction_api::ApiPredictionService;
use valuescope::interfaces::view_models::result_view_model::{
    ProbabilityTier, ResultViewModel, SegmentBadge,
};

fn example_response() -> PredictionResult {
    PredictionResult {
        customer_id: "13085".to_string(),
        predicted_future_spend_30d: 512.4,
        purchase_probability_30d: 0.83,
        customer_segment: "High Value".to_string(),
        insight: "Frequent recent buyer with strong basket size.".to_string(),
        recommended_action: "Offer a loyalty reward within 7 days.".to_string(),
    }
}

fn agent_for(service: Arc<dyn PredictionService>) -> DashboardAgent {
    let app = Application::with_service(service);
    let (handle, outcome_rx) = app.start();
    let (_log_tx, log_rx) = crossbeam_channel::unbounded();
    // _log_tx dropped here; the agent only ever sees an empty log channel.
    let client = SystemClient::new(handle, log_rx, outcome_rx);
    DashboardAgent::new(client, "13085")
}

async fn wait_for_completion(agent: &mut DashboardAgent) {
    for _ in 0..200 {
        agent.drain_events();
        if !agent.session.is_loading {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Prediction did not complete in time");
}

#[tokio::test]
async fn test_submission_renders_example_prediction() {
    let mut agent = agent_for(Arc::new(MockPredictionService::with_response(
        example_response(),
    )));

    // Fill the form in scrambled order; the outbound ordering must not care.
    agent.form.recency_days = "4".to_string();
    agent.form.total_spend = "345.7".to_string();
    agent.form.unique_products = "5".to_string();
    agent.form.avg_spend = "49.3".to_string();
    agent.form.total_units = "12".to_string();
    agent.form.num_transactions = "7".to_string();

    agent.submit();
    assert!(agent.session.is_loading);
    assert!(agent.session.result.is_none());
    assert!(agent.session.error.is_none());

    wait_for_completion(&mut agent).await;

    let result = agent.session.result.as_ref().expect("result populated");
    assert!(agent.session.error.is_none());

    let view = ResultViewModel::from_result(result);
    assert_eq!(view.probability_pct, 83);
    assert_eq!(view.tier, ProbabilityTier::Positive);
    assert_eq!(view.badge, SegmentBadge::HighValue);
    assert_eq!(view.spend_display, "512.40");
}

#[tokio::test]
async fn test_service_failure_populates_error_only() {
    let mut agent = agent_for(Arc::new(MockPredictionService::failing(
        PredictionError::Service {
            detail: "Expected 6 features".to_string(),
        },
    )));

    agent.submit();
    wait_for_completion(&mut agent).await;

    assert!(agent.session.result.is_none());
    assert_eq!(agent.session.error.as_deref(), Some("Expected 6 features"));

    // A resubmission clears the prior error and re-enters loading.
    agent.submit();
    assert!(agent.session.is_loading);
    assert!(agent.session.error.is_none());
}

/// Service that answers slowly enough for a second submission attempt to
/// land while the first is still in flight.
struct SlowService;

#[async_trait::async_trait]
impl PredictionService for SlowService {
    async fn predict(&self, customer_id: &str, features: &FeatureSet) -> PredictionOutcome {
        tokio::time::sleep(Duration::from_millis(50)).await;
        MockPredictionService::new().predict(customer_id, features).await
    }
}

#[tokio::test]
async fn test_only_one_request_in_flight() {
    let mut agent = agent_for(Arc::new(SlowService));

    agent.submit();
    assert!(agent.session.is_loading);

    // Second submission while loading is ignored at the input layer.
    agent.submit();
    agent.submit();

    wait_for_completion(&mut agent).await;
    assert!(agent.session.result.is_some());

    // Give any stray second outcome time to show up, then confirm the
    // session stays settled: exactly one request was served.
    tokio::time::sleep(Duration::from_millis(100)).await;
    agent.drain_events();
    assert!(!agent.session.is_loading);

    let requested = agent
        .activity
        .iter()
        .filter(|e| e.message.starts_with("Prediction requested"))
        .count();
    assert_eq!(requested, 1);
}

#[tokio::test]
async fn test_undecodable_success_body_surfaces_malformed_response() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // One-shot listener that claims success but answers with a body that
    // is not a prediction.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;

        let body = "not json";
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    let service = ApiPredictionService::new(format!("http://{}", addr));
    let err = service
        .predict("13085", &FeatureSet::default())
        .await
        .unwrap_err();

    assert!(matches!(err, PredictionError::MalformedResponse));
}

#[tokio::test]
async fn test_unreachable_service_surfaces_transport_error() {
    // Port 9 (discard) is closed on any sane host; the connection is
    // refused before a request ever goes out.
    let service = ApiPredictionService::new("http://127.0.0.1:9".to_string());
    let err = service
        .predict("13085", &FeatureSet::default())
        .await
        .unwrap_err();

    assert!(matches!(err, PredictionError::Transport { .. }));
    assert!(err.to_string().contains("Could not reach"));
}
