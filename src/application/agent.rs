use crate::application::client::{SystemClient, SystemEvent};
use crate::domain::features::{FeatureSet, parse_metric_input};
use crate::domain::session::{SessionEvent, SessionState};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use tracing::warn;

const MAX_ACTIVITY_EVENTS: usize = 50;
const MAX_LOG_LINES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct ActivityEvent {
    pub timestamp: DateTime<Utc>,
    pub severity: EventSeverity,
    pub message: String,
}

/// Raw text buffers backing the feature form. Fields stay as the user
/// typed them; parsing is deferred to submission, where each field is
/// coerced independently (garbage becomes 0), so the submitted snapshot
/// is identical to parsing on every edit.
pub struct FeatureForm {
    pub customer_id: String,
    pub total_spend: String,
    pub avg_spend: String,
    pub num_transactions: String,
    pub total_units: String,
    pub unique_products: String,
    pub recency_days: String,
}

impl FeatureForm {
    pub fn with_defaults(customer_id: &str) -> Self {
        let defaults = FeatureSet::default();
        Self {
            customer_id: customer_id.to_string(),
            total_spend: defaults.total_spend.to_string(),
            avg_spend: defaults.avg_spend.to_string(),
            num_transactions: defaults.num_transactions.to_string(),
            total_units: defaults.total_units.to_string(),
            unique_products: defaults.unique_products.to_string(),
            recency_days: defaults.recency_days.to_string(),
        }
    }

    /// Snapshot of the form as a FeatureSet. Unparseable fields become 0.
    pub fn to_feature_set(&self) -> FeatureSet {
        FeatureSet {
            total_spend: parse_metric_input(&self.total_spend),
            avg_spend: parse_metric_input(&self.avg_spend),
            num_transactions: parse_metric_input(&self.num_transactions),
            total_units: parse_metric_input(&self.total_units),
            unique_products: parse_metric_input(&self.unique_products),
            recency_days: parse_metric_input(&self.recency_days),
        }
    }
}

/// UI-side state holder: the feature form, the request lifecycle, and the
/// activity/log feeds. Owns the only reference to the session state, so
/// there is nothing shared to race on.
pub struct DashboardAgent {
    client: SystemClient,
    pub form: FeatureForm,
    pub session: SessionState,
    pub activity: VecDeque<ActivityEvent>,
    pub log_lines: VecDeque<String>,
}

impl DashboardAgent {
    pub fn new(client: SystemClient, default_customer_id: &str) -> Self {
        Self {
            client,
            form: FeatureForm::with_defaults(default_customer_id),
            session: SessionState::default(),
            activity: VecDeque::new(),
            log_lines: VecDeque::new(),
        }
    }

    /// True when the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.session.is_loading
    }

    /// Submits the current form. A no-op while a request is outstanding;
    /// the UI disables the button, this is the backstop.
    pub fn submit(&mut self) {
        if self.session.is_loading {
            warn!("Submission ignored: a prediction is already in flight");
            return;
        }

        let customer_id = self.form.customer_id.trim().to_string();
        let features = self.form.to_feature_set();

        match self.client.submit(customer_id.clone(), features) {
            Ok(()) => {
                self.session.apply(SessionEvent::SubmissionStarted);
                self.push_activity(
                    EventSeverity::Info,
                    format!("Prediction requested for customer {}", customer_id),
                );
            }
            Err(e) => {
                self.push_activity(EventSeverity::Warning, e.to_string());
            }
        }
    }

    /// Drains pending system events into UI state. Called once per frame.
    pub fn drain_events(&mut self) {
        while let Some(event) = self.client.poll_next() {
            match event {
                SystemEvent::Log(line) => {
                    self.log_lines.push_back(line);
                    while self.log_lines.len() > MAX_LOG_LINES {
                        self.log_lines.pop_front();
                    }
                }
                SystemEvent::Prediction(outcome) => {
                    match &outcome {
                        Ok(result) => self.push_activity(
                            EventSeverity::Info,
                            format!(
                                "Prediction ready for customer {} ({})",
                                result.customer_id, result.customer_segment
                            ),
                        ),
                        Err(err) => {
                            self.push_activity(EventSeverity::Error, err.to_string())
                        }
                    }
                    self.session.apply(SessionEvent::Completed(outcome));
                }
            }
        }
    }

    fn push_activity(&mut self, severity: EventSeverity, message: String) {
        self.activity.push_front(ActivityEvent {
            timestamp: Utc::now(),
            severity,
            message,
        });
        while self.activity.len() > MAX_ACTIVITY_EVENTS {
            self.activity.pop_back();
        }
    }
}
