use crate::domain::prediction::PredictionResult;

/// Display classification derived from purchase probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityTier {
    Positive,
    Caution,
    Risk,
}

impl ProbabilityTier {
    /// Both boundaries are exclusive: exactly 0.7 is Caution, exactly 0.4
    /// is Risk.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.7 {
            ProbabilityTier::Positive
        } else if probability > 0.4 {
            ProbabilityTier::Caution
        } else {
            ProbabilityTier::Risk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProbabilityTier::Positive => "Likely to purchase",
            ProbabilityTier::Caution => "Uncertain",
            ProbabilityTier::Risk => "At risk",
        }
    }
}

/// Badge styling for the service's free-text segment label. Matching is a
/// case-insensitive substring check; unrecognized labels fall through to
/// the default styling, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentBadge {
    HighValue,
    MediumValue,
    Default,
}

impl SegmentBadge {
    pub fn from_label(segment: &str) -> Self {
        let segment = segment.to_lowercase();
        if segment.contains("high") {
            SegmentBadge::HighValue
        } else if segment.contains("medium") {
            SegmentBadge::MediumValue
        } else {
            SegmentBadge::Default
        }
    }
}

/// Probability as a whole percentage, rounded to nearest.
pub fn format_percent(probability: f64) -> i64 {
    (probability * 100.0).round() as i64
}

/// Currency amount with exactly two decimals and comma thousands grouping.
/// No symbol; callers prepend one.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let fraction = cents % 100;

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!(
        "{}{}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}

/// Everything the result panel needs, precomputed. Pure function of the
/// service response; `insight` and `recommended_action` pass through
/// verbatim.
pub struct ResultViewModel {
    pub customer_id: String,
    pub spend_display: String,
    pub probability_pct: i64,
    pub tier: ProbabilityTier,
    pub badge: SegmentBadge,
    pub segment_label: String,
    pub insight: String,
    pub recommended_action: String,
}

impl ResultViewModel {
    pub fn from_result(result: &PredictionResult) -> Self {
        Self {
            customer_id: result.customer_id.clone(),
            spend_display: format_currency(result.predicted_future_spend_30d),
            probability_pct: format_percent(result.purchase_probability_30d),
            tier: ProbabilityTier::from_probability(result.purchase_probability_30d),
            badge: SegmentBadge::from_label(&result.customer_segment),
            segment_label: result.customer_segment.clone(),
            insight: result.insight.clone(),
            recommended_action: result.recommended_action.clone(),
        }
    }
}
