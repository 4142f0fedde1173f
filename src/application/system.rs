use crate::config::{Config, Mode};
use crate::domain::features::FeatureSet;
use crate::domain::ports::{PredictionOutcome, PredictionService};
use crate::infrastructure::mock::MockPredictionService;
use crate::infrastructure::prediction_api::ApiPredictionService;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// One submission handed from the UI thread to the worker.
#[derive(Debug, Clone)]
pub struct PredictionJob {
    pub customer_id: String,
    pub features: FeatureSet,
}

/// Handle the UI keeps for pushing work into the background runtime.
pub struct SystemHandle {
    pub job_tx: mpsc::Sender<PredictionJob>,
}

/// Owns the prediction service and runs the worker loop that serves the
/// dashboard. Must be started from within a tokio runtime.
pub struct Application {
    service: Arc<dyn PredictionService>,
}

impl Application {
    pub fn build(config: &Config) -> Result<Self> {
        let service: Arc<dyn PredictionService> = match config.mode {
            Mode::Mock => {
                info!("Running against the built-in mock prediction service");
                Arc::new(MockPredictionService::new())
            }
            Mode::Live => {
                info!("Prediction service endpoint: {}", config.base_url);
                Arc::new(ApiPredictionService::new(config.base_url.clone()))
            }
        };

        Ok(Self { service })
    }

    pub fn with_service(service: Arc<dyn PredictionService>) -> Self {
        Self { service }
    }

    /// Spawns the prediction worker. Jobs arrive on a capacity-1 channel
    /// (only one request is ever in flight); outcomes come back on a
    /// crossbeam channel the UI thread polls without blocking.
    pub fn start(&self) -> (SystemHandle, crossbeam_channel::Receiver<PredictionOutcome>) {
        let (job_tx, mut job_rx) = mpsc::channel::<PredictionJob>(1);
        let (outcome_tx, outcome_rx) = crossbeam_channel::unbounded();
        let service = self.service.clone();

        tokio::spawn(async move {
            while let Some(job) = job_rx.recv().await {
                info!("Predicting customer value for {}", job.customer_id);
                let outcome = service.predict(&job.customer_id, &job.features).await;
                if outcome_tx.send(outcome).is_err() {
                    // UI side is gone, nothing left to serve.
                    break;
                }
            }
        });

        (SystemHandle { job_tx }, outcome_rx)
    }
}
