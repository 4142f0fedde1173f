use thiserror::Error;

/// Failure modes for one prediction round trip. All three collapse into a
/// single user-visible message slot; only the text differs.
#[derive(Debug, Clone, Error)]
pub enum PredictionError {
    /// The call never reached the service (network, DNS, timeout). The
    /// underlying cause is kept for logs but not shown to the user.
    #[error("Could not reach the prediction service. Check your connection and try again.")]
    Transport { reason: String },

    /// The service answered with a non-2xx status. `detail` is either the
    /// service's own error message or the HTTP status phrase.
    #[error("{detail}")]
    Service { detail: String },

    /// A 2xx response whose body does not parse as a prediction.
    #[error("The prediction service returned a response that could not be read.")]
    MalformedResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_surfaces_detail_verbatim() {
        let err = PredictionError::Service {
            detail: "Expected 6 features".to_string(),
        };
        assert_eq!(err.to_string(), "Expected 6 features");
    }

    #[test]
    fn test_transport_error_hides_underlying_cause() {
        let err = PredictionError::Transport {
            reason: "dns error: failed to lookup".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Could not reach"));
        assert!(!msg.contains("dns"));
    }
}
