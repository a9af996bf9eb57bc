//! Residual baseline implementations.

use anomaly_api::BaselineKind;
use anomaly_spi::{AnomalyError, ResidualBaseline, Result};

// ============================================================================
// Fitted Values Baseline
// ============================================================================

/// In-sample predictions of a fitted model.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedValuesBaseline {
    fitted: Vec<f64>,
}

impl FittedValuesBaseline {
    pub fn new(fitted: Vec<f64>) -> Self {
        Self { fitted }
    }
}

impl ResidualBaseline for FittedValuesBaseline {
    fn name(&self) -> String {
        "fitted_model".to_string()
    }

    fn expected(&self, observed: &[f64]) -> Result<Vec<f64>> {
        if observed.len() != self.fitted.len() {
            return Err(AnomalyError::LengthMismatch {
                expected: observed.len(),
                got: self.fitted.len(),
            });
        }
        Ok(self.fitted.clone())
    }
}

// ============================================================================
// Rolling Mean Baseline
// ============================================================================

/// Trailing mean including the current month. The first months use the
/// shorter window available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingMeanBaseline {
    window: usize,
}

impl RollingMeanBaseline {
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(AnomalyError::InvalidParameter {
                name: "window".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self { window })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl ResidualBaseline for RollingMeanBaseline {
    fn name(&self) -> String {
        format!("rolling_mean({})", self.window)
    }

    fn expected(&self, observed: &[f64]) -> Result<Vec<f64>> {
        Ok((0..observed.len())
            .map(|t| {
                let start = (t + 1).saturating_sub(self.window);
                let slice = &observed[start..=t];
                slice.iter().sum::<f64>() / slice.len() as f64
            })
            .collect())
    }
}

/// Build the configured baseline.
///
/// `fitted` must be provided for [`BaselineKind::FittedModel`].
pub fn baseline_for(
    kind: BaselineKind,
    fitted: Option<&[f64]>,
) -> Result<Box<dyn ResidualBaseline>> {
    match kind {
        BaselineKind::FittedModel => match fitted {
            Some(values) => Ok(Box::new(FittedValuesBaseline::new(values.to_vec()))),
            None => Err(AnomalyError::InvalidParameter {
                name: "baseline".to_string(),
                reason: "fitted_model baseline needs in-sample fitted values".to_string(),
            }),
        },
        BaselineKind::RollingMean { window } => Ok(Box::new(RollingMeanBaseline::new(window)?)),
    }
}
