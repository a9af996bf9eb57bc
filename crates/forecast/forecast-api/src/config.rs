//! Forecast configuration

use std::fmt;

use forecast_spi::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Longest horizon accepted, in months.
pub const MAX_HORIZON: usize = 120;

const MAX_AR_ORDER: usize = 10;
const MAX_DIFFERENCING: usize = 2;
const MAX_MA_ORDER: usize = 10;

/// Model family used by the forecaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    /// ARIMA(p, d, q) with constant
    Arima { p: usize, d: usize, q: usize },
    /// Carry the last value forward
    Naive,
}

impl Default for ModelSpec {
    fn default() -> Self {
        ModelSpec::Arima { p: 1, d: 1, q: 1 }
    }
}

impl fmt::Display for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSpec::Arima { p, d, q } => write!(f, "ARIMA({},{},{})", p, d, q),
            ModelSpec::Naive => write!(f, "Naive"),
        }
    }
}

impl ModelSpec {
    /// Smallest series the model can be estimated on. Shorter series fall
    /// back to the naive model.
    pub fn min_observations(&self) -> usize {
        match *self {
            ModelSpec::Arima { p, d, q } => {
                // Differencing loses d points; the regression needs k + 3
                // rows after the long-AR burn-in.
                let k = 1 + p + q;
                let mut n = d + k + 3;
                loop {
                    let differenced = n - d;
                    let start = regression_start(p, q, differenced);
                    if differenced >= start + k + 3 {
                        return n;
                    }
                    n += 1;
                }
            }
            ModelSpec::Naive => 2,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let ModelSpec::Arima { p, d, q } = *self {
            if p > MAX_AR_ORDER {
                return Err(ForecastError::invalid_parameter(
                    "model.p",
                    format!("must be at most {}", MAX_AR_ORDER),
                ));
            }
            if d > MAX_DIFFERENCING {
                return Err(ForecastError::invalid_parameter(
                    "model.d",
                    format!("must be at most {}", MAX_DIFFERENCING),
                ));
            }
            if q > MAX_MA_ORDER {
                return Err(ForecastError::invalid_parameter(
                    "model.q",
                    format!("must be at most {}", MAX_MA_ORDER),
                ));
            }
        }
        Ok(())
    }
}

/// Order of the long autoregression that approximates the innovations of
/// an ARMA(p, q) fitted to `n` (differenced) observations.
pub fn long_ar_order(p: usize, q: usize, n: usize) -> usize {
    (p + q).max((n as f64).sqrt().floor() as usize).max(1)
}

/// First index of the differenced series with a complete row of lagged
/// values and lagged innovations.
pub fn regression_start(p: usize, q: usize, n: usize) -> usize {
    if q > 0 {
        p.max(long_ar_order(p, q, n) + q)
    } else {
        p
    }
}

/// Configuration for the monthly forecaster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of future months to forecast
    pub horizon: usize,
    /// Confidence level for the bands (e.g., 0.95 for 95%)
    pub confidence_level: f64,
    /// Fewest historical months accepted
    pub min_history: usize,
    /// Model family
    pub model: ModelSpec,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: 3,
            confidence_level: 0.95,
            min_history: 6,
            model: ModelSpec::default(),
        }
    }
}

impl ForecastConfig {
    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 || self.horizon > MAX_HORIZON {
            return Err(ForecastError::invalid_parameter(
                "horizon",
                format!("must be between 1 and {}", MAX_HORIZON),
            ));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ForecastError::invalid_parameter(
                "confidence_level",
                "must be strictly between 0 and 1",
            ));
        }
        if self.min_history < 2 {
            return Err(ForecastError::invalid_parameter(
                "min_history",
                "must be at least 2",
            ));
        }
        self.model.validate()
    }
}

/// Builder for ForecastConfig.
#[derive(Debug, Default)]
pub struct ForecastConfigBuilder {
    horizon: Option<usize>,
    confidence_level: Option<f64>,
    min_history: Option<usize>,
    model: Option<ModelSpec>,
}

impl ForecastConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the forecast horizon in months.
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Set the confidence level.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = Some(level);
        self
    }

    /// Set the minimum number of historical months.
    pub fn min_history(mut self, months: usize) -> Self {
        self.min_history = Some(months);
        self
    }

    /// Set the model family.
    pub fn model(mut self, model: ModelSpec) -> Self {
        self.model = Some(model);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ForecastConfig> {
        let defaults = ForecastConfig::default();
        let config = ForecastConfig {
            horizon: self.horizon.unwrap_or(defaults.horizon),
            confidence_level: self.confidence_level.unwrap_or(defaults.confidence_level),
            min_history: self.min_history.unwrap_or(defaults.min_history),
            model: self.model.unwrap_or(defaults.model),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ForecastConfig::default();
        assert_eq!(config.horizon, 3);
        assert_eq!(config.confidence_level, 0.95);
        assert_eq!(config.min_history, 6);
        assert_eq!(config.model, ModelSpec::Arima { p: 1, d: 1, q: 1 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_horizon() {
        let config = ForecastConfig {
            horizon: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ForecastError::InvalidParameter { name, .. }) if name == "horizon"
        ));
    }

    #[test]
    fn test_validate_rejects_confidence_bounds() {
        for level in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let config = ForecastConfig {
                confidence_level: level,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "level {} accepted", level);
        }
    }

    #[test]
    fn test_validate_rejects_large_orders() {
        let model = ModelSpec::Arima { p: 1, d: 3, q: 1 };
        assert!(model.validate().is_err());
        let model = ModelSpec::Arima { p: 11, d: 0, q: 0 };
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_model_spec_display() {
        assert_eq!(ModelSpec::default().to_string(), "ARIMA(1,1,1)");
        assert_eq!(ModelSpec::Naive.to_string(), "Naive");
    }

    #[test]
    fn test_min_observations() {
        assert_eq!(ModelSpec::Arima { p: 1, d: 1, q: 1 }.min_observations(), 11);
        assert_eq!(ModelSpec::Arima { p: 1, d: 0, q: 0 }.min_observations(), 6);
        assert_eq!(ModelSpec::Naive.min_observations(), 2);
    }

    #[test]
    fn test_regression_start() {
        assert_eq!(long_ar_order(1, 1, 10), 3);
        assert_eq!(regression_start(1, 1, 10), 4);
        assert_eq!(regression_start(2, 0, 10), 2);
    }

    #[test]
    fn test_builder() {
        let config = ForecastConfigBuilder::new()
            .horizon(6)
            .confidence_level(0.8)
            .min_history(12)
            .model(ModelSpec::Naive)
            .build()
            .unwrap();

        assert_eq!(config.horizon, 6);
        assert_eq!(config.confidence_level, 0.8);
        assert_eq!(config.min_history, 12);
        assert_eq!(config.model, ModelSpec::Naive);
    }

    #[test]
    fn test_builder_validates() {
        assert!(ForecastConfigBuilder::new().horizon(0).build().is_err());
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: ForecastConfig = serde_json::from_str(r#"{"horizon": 4}"#).unwrap();
        assert_eq!(config.horizon, 4);
        assert_eq!(config.min_history, 6);

        let json = serde_json::to_string(&ModelSpec::default()).unwrap();
        assert_eq!(json, r#"{"kind":"arima","p":1,"d":1,"q":1}"#);
    }
}
