use crate::domain::ports::PredictionOutcome;
use crate::domain::prediction::PredictionResult;

/// The dashboard's request lifecycle: Idle -> Loading -> {Success, Failed},
/// re-entering Loading from either terminal state on resubmission.
///
/// Updated exclusively through [`SessionState::apply`] so the lifecycle can
/// be tested without any rendering involved. After a completed request
/// exactly one of `result`/`error` is populated, never both.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub result: Option<PredictionResult>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum SessionEvent {
    /// A submission was handed to the worker. Clears any prior outcome.
    SubmissionStarted,
    /// The in-flight request finished.
    Completed(PredictionOutcome),
}

impl SessionState {
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::SubmissionStarted => {
                self.result = None;
                self.error = None;
                self.is_loading = true;
            }
            SessionEvent::Completed(Ok(result)) => {
                self.result = Some(result);
                self.error = None;
                self.is_loading = false;
            }
            SessionEvent::Completed(Err(err)) => {
                self.result = None;
                self.error = Some(err.to_string());
                self.is_loading = false;
            }
        }
    }

    /// True before the first submission has produced any outcome.
    pub fn is_idle(&self) -> bool {
        !self.is_loading && self.result.is_none() && self.error.is_none()
    }
}
