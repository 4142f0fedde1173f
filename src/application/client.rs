use crate::application::system::{PredictionJob, SystemHandle};
use crate::domain::features::FeatureSet;
use crate::domain::ports::PredictionOutcome;
use anyhow::Result;
use crossbeam_channel::Receiver;

/// Unified event type for the user interface.
#[derive(Debug)]
pub enum SystemEvent {
    Log(String),
    Prediction(PredictionOutcome),
}

/// A client interface for the dashboard side of the system.
/// Abstracts away channel management and provides a clean API for the UI.
pub struct SystemClient {
    log_rx: Receiver<String>,
    outcome_rx: Receiver<PredictionOutcome>,
    handle: SystemHandle,
}

impl SystemClient {
    pub fn new(
        handle: SystemHandle,
        log_rx: Receiver<String>,
        outcome_rx: Receiver<PredictionOutcome>,
    ) -> Self {
        Self {
            log_rx,
            outcome_rx,
            handle,
        }
    }

    /// Poll for the next available event from any channel.
    /// Non-blocking; checks channels in priority order.
    pub fn poll_next(&mut self) -> Option<SystemEvent> {
        // 1. Logs (high volume, simple strings)
        if let Ok(msg) = self.log_rx.try_recv() {
            return Some(SystemEvent::Log(msg));
        }

        // 2. Prediction outcomes
        if let Ok(outcome) = self.outcome_rx.try_recv() {
            return Some(SystemEvent::Prediction(outcome));
        }

        None
    }

    /// Hands a submission to the background worker. The job channel has
    /// capacity 1, so this also refuses a submission when one is already
    /// queued; the caller gates on its loading flag before getting here.
    pub fn submit(&self, customer_id: String, features: FeatureSet) -> Result<()> {
        self.handle
            .job_tx
            .try_send(PredictionJob {
                customer_id,
                features,
            })
            .map_err(|e| anyhow::anyhow!("Failed to queue prediction request: {}", e))
    }
}
