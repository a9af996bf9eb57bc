//! Trait for an estimated model

use std::fmt::Debug;

use crate::error::Result;
use crate::model::ConfidenceInterval;

/// A model fitted to a historical series.
pub trait FittedModel: Send + Sync + Debug {
    /// Model name including its orders.
    fn name(&self) -> String;

    /// Forecast `horizon` steps past the end of the training data with
    /// bands at `confidence_level` (e.g. 0.95).
    fn forecast(&self, horizon: usize, confidence_level: f64) -> Result<ConfidenceInterval>;

    /// In-sample expected value for every training observation.
    fn fitted_values(&self) -> &[f64];

    /// Observed minus fitted for every training observation.
    fn residuals(&self) -> &[f64];

    /// Estimated standard deviation of one-step innovations.
    fn sigma(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Forecaster;
    use crate::error::ForecastError;

    #[derive(Debug)]
    struct MeanModel {
        mean: f64,
        fitted: Vec<f64>,
        residuals: Vec<f64>,
    }

    impl FittedModel for MeanModel {
        fn name(&self) -> String {
            "Mean".to_string()
        }

        fn forecast(&self, horizon: usize, confidence_level: f64) -> Result<ConfidenceInterval> {
            Ok(ConfidenceInterval {
                forecast: vec![self.mean; horizon],
                lower: vec![self.mean - 1.0; horizon],
                upper: vec![self.mean + 1.0; horizon],
                confidence_level,
            })
        }

        fn fitted_values(&self) -> &[f64] {
            &self.fitted
        }

        fn residuals(&self) -> &[f64] {
            &self.residuals
        }

        fn sigma(&self) -> f64 {
            1.0
        }
    }

    struct MeanForecaster;

    impl Forecaster for MeanForecaster {
        fn name(&self) -> String {
            "Mean".to_string()
        }

        fn fit(&self, data: &[f64]) -> Result<Box<dyn FittedModel>> {
            if data.is_empty() {
                return Err(ForecastError::InsufficientData {
                    required: 1,
                    actual: 0,
                });
            }
            let mean = data.iter().sum::<f64>() / data.len() as f64;
            Ok(Box::new(MeanModel {
                mean,
                fitted: vec![mean; data.len()],
                residuals: data.iter().map(|x| x - mean).collect(),
            }))
        }
    }

    #[test]
    fn test_forecaster_as_trait_object() {
        let forecaster: Box<dyn Forecaster> = Box::new(MeanForecaster);
        let model = forecaster.fit(&[2.0, 4.0, 6.0]).unwrap();
        let ci = model.forecast(2, 0.9).unwrap();
        assert_eq!(ci.forecast, vec![4.0, 4.0]);
        assert_eq!(model.fitted_values().len(), 3);
        assert_eq!(model.residuals(), &[-2.0, 0.0, 2.0]);
        assert_eq!(forecaster.name(), model.name());
    }

    #[test]
    fn test_forecaster_propagates_errors() {
        let err = MeanForecaster.fit(&[]).unwrap_err();
        assert_eq!(
            err,
            ForecastError::InsufficientData {
                required: 1,
                actual: 0
            }
        );
    }
}
