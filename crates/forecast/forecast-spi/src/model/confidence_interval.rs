//! Confidence interval model

use serde::{Deserialize, Serialize};

/// Confidence interval result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Point forecast
    pub forecast: Vec<f64>,
    /// Lower bound of confidence interval
    pub lower: Vec<f64>,
    /// Upper bound of confidence interval
    pub upper: Vec<f64>,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Number of forecast steps.
    pub fn len(&self) -> usize {
        self.forecast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }

    /// Width of the band at each step.
    pub fn widths(&self) -> Vec<f64> {
        self.upper
            .iter()
            .zip(&self.lower)
            .map(|(u, l)| u - l)
            .collect()
    }

    /// Clamp point, lower and upper at zero. Revenue cannot be negative,
    /// and clamping all three keeps `lower <= point <= upper`.
    pub fn clip_non_negative(mut self) -> Self {
        for v in self
            .forecast
            .iter_mut()
            .chain(self.lower.iter_mut())
            .chain(self.upper.iter_mut())
        {
            *v = v.max(0.0);
        }
        self
    }
}
