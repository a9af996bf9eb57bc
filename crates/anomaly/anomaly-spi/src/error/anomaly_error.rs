//! Anomaly detection error types.

use thiserror::Error;

/// Anomaly detection errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnomalyError {
    #[error("Insufficient data: required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Length mismatch: expected {expected} values, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = AnomalyError::InsufficientData {
            required: 6,
            got: 3,
        };
        assert_eq!(error.to_string(), "Insufficient data: required 6, got 3");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = AnomalyError::InvalidParameter {
            name: "threshold".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter: threshold - must be positive"
        );
    }

    #[test]
    fn test_length_mismatch_display() {
        let error = AnomalyError::LengthMismatch {
            expected: 12,
            got: 11,
        };
        assert_eq!(
            error.to_string(),
            "Length mismatch: expected 12 values, got 11"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(AnomalyError::LengthMismatch {
            expected: 1,
            got: 0,
        });
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnomalyError>();
    }
}
