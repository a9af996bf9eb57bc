//! Forecast error types

use thiserror::Error;

/// Errors that can occur during forecasting operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Input series is malformed (non-finite values, gaps)
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl ForecastError {
    /// Shorthand for [`ForecastError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_insufficient_data_error_message() {
        let error = ForecastError::InsufficientData {
            required: 6,
            actual: 3,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 6 points, got 3"
        );
    }

    #[test]
    fn test_invalid_parameter_error_message() {
        let error = ForecastError::invalid_parameter("horizon", "must be at least 1");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'horizon': must be at least 1"
        );
    }

    #[test]
    fn test_numerical_error_message() {
        let error = ForecastError::NumericalError("matrix is singular".to_string());
        assert_eq!(error.to_string(), "Numerical error: matrix is singular");
    }

    #[test]
    fn test_invalid_data_error_message() {
        let error = ForecastError::InvalidData("non-finite value at index 2".to_string());
        assert_eq!(error.to_string(), "Invalid data: non-finite value at index 2");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(ForecastError::NumericalError("x".into()));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_all_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastError>();
    }

    #[test]
    fn test_error_downcast() {
        let error: Box<dyn Error> = Box::new(ForecastError::InvalidData("gap".into()));
        let downcasted = error.downcast_ref::<ForecastError>();
        assert!(matches!(downcasted, Some(ForecastError::InvalidData(_))));
    }
}
