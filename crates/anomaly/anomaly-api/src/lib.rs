//! Anomaly Detection API
//!
//! Configuration types and builders for anomaly detection.

use std::fmt;

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{AnomalyError, AnomalyRecord, AnomalyReport, ResidualBaseline, Result};

// ============================================================================
// Baseline Selection
// ============================================================================

/// Where expected values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BaselineKind {
    /// In-sample predictions of the fitted forecast model.
    FittedModel,
    /// Trailing mean over `window` months, including the current one.
    RollingMean { window: usize },
}

impl Default for BaselineKind {
    fn default() -> Self {
        BaselineKind::FittedModel
    }
}

impl fmt::Display for BaselineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaselineKind::FittedModel => write!(f, "fitted_model"),
            BaselineKind::RollingMean { window } => write!(f, "rolling_mean({})", window),
        }
    }
}

// ============================================================================
// Detector Configuration
// ============================================================================

/// Residual z-score detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// Flag months with `|z|` strictly above this (default: 3.0).
    pub threshold: f64,
    /// Below this many months no month is flagged (default: 3).
    pub min_points: usize,
    /// Expected-value source.
    pub baseline: BaselineKind,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            threshold: 3.0,
            min_points: 3,
            baseline: BaselineKind::default(),
        }
    }
}

impl AnomalyConfig {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(invalid("threshold", "must be a positive number"));
        }
        if self.min_points < 2 {
            return Err(invalid("min_points", "must be at least 2"));
        }
        if let BaselineKind::RollingMean { window } = self.baseline {
            if window == 0 {
                return Err(invalid("baseline.window", "must be at least 1"));
            }
        }
        Ok(())
    }
}

fn invalid(name: &str, reason: &str) -> AnomalyError {
    AnomalyError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Builder for AnomalyConfig.
#[derive(Debug, Default)]
pub struct AnomalyConfigBuilder {
    threshold: Option<f64>,
    min_points: Option<usize>,
    baseline: Option<BaselineKind>,
}

impl AnomalyConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn min_points(mut self, min_points: usize) -> Self {
        self.min_points = Some(min_points);
        self
    }

    pub fn baseline(mut self, baseline: BaselineKind) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<AnomalyConfig> {
        let defaults = AnomalyConfig::default();
        let config = AnomalyConfig {
            threshold: self.threshold.unwrap_or(defaults.threshold),
            min_points: self.min_points.unwrap_or(defaults.min_points),
            baseline: self.baseline.unwrap_or(defaults.baseline),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AnomalyConfig, AnomalyConfigBuilder, BaselineKind};
    pub use anomaly_spi::{AnomalyError, AnomalyRecord, AnomalyReport, ResidualBaseline, Result};
}
