//! Pipeline configuration

use anomaly_api::AnomalyConfig;
use forecast_api::ForecastConfig;
use sales_api::{NormalizerConfig, RankingConfig};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for one pipeline run.
///
/// The pipeline never reads process-wide defaults; two runs with different
/// configurations cannot interfere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub normalizer: NormalizerConfig,
    pub forecast: ForecastConfig,
    pub anomaly: AnomalyConfig,
    pub ranking: RankingConfig,
}

impl PipelineConfig {
    /// Validate every stage configuration.
    pub fn validate(&self) -> Result<()> {
        self.normalizer.validate()?;
        self.ranking.validate()?;
        self.forecast.validate()?;
        self.anomaly.validate()?;
        Ok(())
    }
}

/// Builder for PipelineConfig.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Create a new builder with default stage configurations.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalizer(mut self, normalizer: NormalizerConfig) -> Self {
        self.config.normalizer = normalizer;
        self
    }

    pub fn forecast(mut self, forecast: ForecastConfig) -> Self {
        self.config.forecast = forecast;
        self
    }

    pub fn anomaly(mut self, anomaly: AnomalyConfig) -> Self {
        self.config.anomaly = anomaly;
        self
    }

    pub fn ranking(mut self, ranking: RankingConfig) -> Self {
        self.config.ranking = ranking;
        self
    }

    /// Forecast horizon in months.
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.config.forecast.horizon = horizon;
        self
    }

    pub fn confidence_level(mut self, level: f64) -> Self {
        self.config.forecast.confidence_level = level;
        self
    }

    /// Anomaly z-score threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.anomaly.threshold = threshold;
        self
    }

    /// Fewest historical months for forecasting and anomaly detection.
    pub fn min_history(mut self, months: usize) -> Self {
        self.config.forecast.min_history = months;
        self
    }

    pub fn exclude_returns(mut self, exclude: bool) -> Self {
        self.config.normalizer.exclude_returns = exclude;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<PipelineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
