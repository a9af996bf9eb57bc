//! Pipeline error types

use anomaly_spi::AnomalyError;
use forecast_spi::ForecastError;
use sales_spi::SalesError;
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that stop a pipeline run or one of its stages
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Normalization or aggregation failed; nothing downstream ran
    #[error(transparent)]
    Sales(#[from] SalesError),

    /// Forecasting failed
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    /// Anomaly detection failed
    #[error(transparent)]
    Anomaly(#[from] AnomalyError),
}

impl PipelineError {
    /// Too few historical months for the stage.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            PipelineError::Forecast(ForecastError::InsufficientData { .. })
                | PipelineError::Anomaly(AnomalyError::InsufficientData { .. })
        )
    }
}
