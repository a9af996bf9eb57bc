//! Naive random-walk forecaster.
//!
//! Carries the last observation forward. Used directly when configured and
//! as the fallback whenever the ARIMA estimate is unavailable.

use forecast_spi::{ConfidenceInterval, FittedModel, ForecastError, Forecaster, Result};

use crate::confidence;

/// Fits [`NaiveModel`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveForecaster;

impl NaiveForecaster {
    pub fn new() -> Self {
        Self
    }

    /// Fit returning the concrete model type.
    pub fn fit_model(&self, data: &[f64]) -> Result<NaiveModel> {
        let last = match data.last() {
            Some(&last) => last,
            None => {
                return Err(ForecastError::InsufficientData {
                    required: 1,
                    actual: 0,
                })
            }
        };
        if data.iter().any(|x| !x.is_finite()) {
            return Err(ForecastError::InvalidData(
                "series contains NaN or infinite values".to_string(),
            ));
        }

        // Each month is expected to repeat the previous one; the first month
        // has no predecessor and predicts itself.
        let mut fitted = Vec::with_capacity(data.len());
        fitted.push(data[0]);
        fitted.extend_from_slice(&data[..data.len() - 1]);
        let residuals: Vec<f64> = data.iter().zip(&fitted).map(|(y, f)| y - f).collect();

        let diffs = &residuals[1..];
        let sigma = if diffs.len() < 2 {
            0.0
        } else {
            let m = diffs.iter().sum::<f64>() / diffs.len() as f64;
            let ss: f64 = diffs.iter().map(|d| (d - m).powi(2)).sum();
            (ss / (diffs.len() - 1) as f64).sqrt()
        };

        Ok(NaiveModel {
            last,
            sigma,
            fitted,
            residuals,
        })
    }
}

impl Forecaster for NaiveForecaster {
    fn name(&self) -> String {
        "Naive".to_string()
    }

    fn fit(&self, data: &[f64]) -> Result<Box<dyn FittedModel>> {
        Ok(Box::new(self.fit_model(data)?))
    }
}

/// Random walk fitted to a series.
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveModel {
    last: f64,
    sigma: f64,
    fitted: Vec<f64>,
    residuals: Vec<f64>,
}

impl NaiveModel {
    pub fn last_value(&self) -> f64 {
        self.last
    }
}

impl FittedModel for NaiveModel {
    fn name(&self) -> String {
        "Naive".to_string()
    }

    fn forecast(&self, horizon: usize, confidence_level: f64) -> Result<ConfidenceInterval> {
        if horizon == 0 {
            return Err(ForecastError::invalid_parameter(
                "horizon",
                "must be at least 1",
            ));
        }
        confidence::from_residuals(vec![self.last; horizon], self.sigma, confidence_level)
    }

    fn fitted_values(&self) -> &[f64] {
        &self.fitted
    }

    fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    fn sigma(&self) -> f64 {
        self.sigma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_carries_last_value() {
        let model = NaiveForecaster::new()
            .fit_model(&[10.0, 12.0, 11.0, 15.0])
            .unwrap();
        let ci = model.forecast(3, 0.95).unwrap();
        assert_eq!(ci.forecast, vec![15.0, 15.0, 15.0]);
        assert_eq!(model.last_value(), 15.0);
    }

    #[test]
    fn test_naive_fitted_and_residuals() {
        let model = NaiveForecaster::new().fit_model(&[10.0, 12.0, 11.0]).unwrap();
        assert_eq!(model.fitted_values(), &[10.0, 10.0, 12.0]);
        assert_eq!(model.residuals(), &[0.0, 2.0, -1.0]);
    }

    #[test]
    fn test_naive_sigma_from_differences() {
        // Differences 2, -1, 4: mean 5/3, sample variance 19/3
        let model = NaiveForecaster::new()
            .fit_model(&[10.0, 12.0, 11.0, 15.0])
            .unwrap();
        assert!((model.sigma() - (19.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_naive_bands_widen_with_sqrt_h() {
        let model = NaiveForecaster::new()
            .fit_model(&[10.0, 12.0, 11.0, 15.0])
            .unwrap();
        let ci = model.forecast(4, 0.95).unwrap();
        let widths = ci.widths();
        assert!((widths[3] / widths[0] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_naive_constant_series_has_zero_band() {
        let model = NaiveForecaster::new().fit_model(&[7.0; 6]).unwrap();
        let ci = model.forecast(2, 0.95).unwrap();
        assert_eq!(ci.lower, vec![7.0, 7.0]);
        assert_eq!(ci.upper, vec![7.0, 7.0]);
    }

    #[test]
    fn test_naive_rejects_empty_and_zero_horizon() {
        assert!(matches!(
            NaiveForecaster::new().fit(&[]),
            Err(ForecastError::InsufficientData { .. })
        ));
        let model = NaiveForecaster::new().fit_model(&[1.0, 2.0]).unwrap();
        assert!(model.forecast(0, 0.95).is_err());
    }
}
