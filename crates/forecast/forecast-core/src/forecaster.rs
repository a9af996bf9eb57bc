//! Monthly revenue forecaster.
//!
//! Fits the configured model on a [`MonthlySeries`], falling back to the
//! naive model when the series cannot support it, and labels the forecast
//! with the months that follow the history.

use chrono::NaiveDate;
use forecast_api::{ForecastConfig, ModelSpec};
use forecast_spi::{FittedModel, Forecast, ForecastError, ForecastPoint, Forecaster, Result};
use sales_spi::{add_months, MonthlySeries};
use tracing::{debug, info, warn};

use crate::arima::ArimaForecaster;
use crate::naive::NaiveForecaster;

/// Fits forecasting models on monthly revenue series.
#[derive(Debug, Clone)]
pub struct MonthlyForecaster {
    config: ForecastConfig,
}

impl MonthlyForecaster {
    /// Create a forecaster, validating the configuration.
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Fit the configured model.
    ///
    /// Fails with [`ForecastError::InsufficientData`] below `min_history`
    /// months. Above it, fitting always succeeds: a series the configured
    /// model cannot handle gets the naive model and a recorded reason.
    pub fn fit(&self, series: &MonthlySeries) -> Result<FittedSeries> {
        let values = series.values();
        if values.len() < self.config.min_history {
            return Err(ForecastError::InsufficientData {
                required: self.config.min_history,
                actual: values.len(),
            });
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::InvalidData(
                "series contains NaN or infinite values".to_string(),
            ));
        }
        let last_month = series.last_month().ok_or(ForecastError::InsufficientData {
            required: self.config.min_history,
            actual: 0,
        })?;

        let (model, fallback) = match self.config.model {
            ModelSpec::Naive => (NaiveForecaster::new().fit(&values)?, None),
            spec @ ModelSpec::Arima { p, d, q } => match arima_blocker(&values, &spec) {
                Some(reason) => (NaiveForecaster::new().fit(&values)?, Some(reason)),
                None => match ArimaForecaster::new(p, d, q)?.fit(&values) {
                    Ok(model) => (model, None),
                    Err(err) => (NaiveForecaster::new().fit(&values)?, Some(err.to_string())),
                },
            },
        };

        if let Some(reason) = &fallback {
            warn!(
                configured = %self.config.model,
                reason = %reason,
                "falling back to naive forecast"
            );
        }
        info!(
            model = %model.name(),
            months = values.len(),
            sigma = model.sigma(),
            "fitted forecast model"
        );

        Ok(FittedSeries {
            model,
            fallback,
            last_month,
            observed: values,
            horizon: self.config.horizon,
            confidence_level: self.config.confidence_level,
        })
    }
}

/// Reason the configured ARIMA cannot be attempted, if any.
fn arima_blocker(values: &[f64], spec: &ModelSpec) -> Option<String> {
    let first = values.first().copied().unwrap_or(0.0);
    let scale = values.iter().fold(1.0_f64, |acc, v| acc.max(v.abs()));
    if values.iter().all(|v| (v - first).abs() <= 1e-12 * scale) {
        return Some("constant series".to_string());
    }
    let required = spec.min_observations();
    if values.len() < required {
        return Some(format!(
            "{} months is too short for {} (needs {})",
            values.len(),
            spec,
            required
        ));
    }
    None
}

/// A model fitted to a monthly series, ready to forecast.
#[derive(Debug)]
pub struct FittedSeries {
    model: Box<dyn FittedModel>,
    fallback: Option<String>,
    last_month: NaiveDate,
    observed: Vec<f64>,
    horizon: usize,
    confidence_level: f64,
}

impl FittedSeries {
    pub fn model(&self) -> &dyn FittedModel {
        self.model.as_ref()
    }

    pub fn model_name(&self) -> String {
        self.model.name()
    }

    /// Why the naive model replaced the configured one.
    pub fn fallback_reason(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    pub fn observed(&self) -> &[f64] {
        &self.observed
    }

    /// In-sample expected revenue per historical month.
    pub fn fitted_values(&self) -> &[f64] {
        self.model.fitted_values()
    }

    pub fn residuals(&self) -> &[f64] {
        self.model.residuals()
    }

    /// Forecast with the configured horizon and confidence level.
    pub fn forecast(&self) -> Result<Forecast> {
        self.forecast_with(self.horizon, self.confidence_level)
    }

    /// Forecast `horizon` months at `confidence_level`, clipped at zero.
    pub fn forecast_with(&self, horizon: usize, confidence_level: f64) -> Result<Forecast> {
        let interval = self
            .model
            .forecast(horizon, confidence_level)?
            .clip_non_negative();

        let mut points = Vec::with_capacity(horizon);
        for (step, ((&point, &lower), &upper)) in interval
            .forecast
            .iter()
            .zip(&interval.lower)
            .zip(&interval.upper)
            .enumerate()
        {
            let month = add_months(self.last_month, step as u32 + 1).ok_or_else(|| {
                ForecastError::InvalidData("forecast month is out of range".to_string())
            })?;
            points.push(ForecastPoint {
                month,
                point_estimate: point,
                lower_bound: lower,
                upper_bound: upper,
            });
        }
        debug!(horizon, confidence_level, "produced forecast points");

        Ok(Forecast {
            model: self.model.name(),
            confidence_level,
            points,
            fallback: self.fallback.clone(),
        })
    }
}

/// Fit and forecast in one call.
pub fn forecast_series(series: &MonthlySeries, config: &ForecastConfig) -> Result<Forecast> {
    MonthlyForecaster::new(config.clone())?.fit(series)?.forecast()
}
