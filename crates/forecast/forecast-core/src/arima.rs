//! ARIMA (AutoRegressive Integrated Moving Average) implementation
//!
//! The model on the `d`-times differenced series `w` is
//!
//! ```text
//! w_t = c + φ_1 w_{t-1} + … + φ_p w_{t-p} + ε_t + θ_1 ε_{t-1} + … + θ_q ε_{t-q}
//! ```
//!
//! Coefficients are estimated with the Hannan-Rissanen procedure:
//!
//! 1. fit a long autoregression by Yule-Walker to approximate the
//!    innovations `ε̂`,
//! 2. regress `w_t` on a constant, its own lags and the lagged `ε̂` by
//!    ordinary least squares.
//!
//! Both stages are closed-form, so estimation is deterministic. Prediction
//! intervals come from the ψ-weights of the integrated model.

use forecast_api::{long_ar_order, regression_start};
use forecast_spi::{ConfidenceInterval, FittedModel, ForecastError, Forecaster, Result};
use tracing::debug;

use crate::{confidence, linalg};

const MAX_AR_ORDER: usize = 10;
const MAX_DIFFERENCING: usize = 2;
const MAX_MA_ORDER: usize = 10;

/// Estimates ARIMA(p, d, q) models with a constant term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArimaForecaster {
    p: usize,
    d: usize,
    q: usize,
}

impl ArimaForecaster {
    /// Create a forecaster with the given orders.
    ///
    /// # Arguments
    ///
    /// * `p` - Order of autoregressive component (0-10)
    /// * `d` - Degree of differencing (0-2)
    /// * `q` - Order of moving average component (0-10)
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self> {
        if p > MAX_AR_ORDER {
            return Err(ForecastError::invalid_parameter(
                "p",
                "AR order must be <= 10",
            ));
        }
        if d > MAX_DIFFERENCING {
            return Err(ForecastError::invalid_parameter(
                "d",
                "Differencing order must be <= 2",
            ));
        }
        if q > MAX_MA_ORDER {
            return Err(ForecastError::invalid_parameter(
                "q",
                "MA order must be <= 10",
            ));
        }
        Ok(Self { p, d, q })
    }

    pub fn orders(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Fit returning the concrete model type.
    pub fn fit_model(&self, data: &[f64]) -> Result<ArimaModel> {
        if data.iter().any(|x| !x.is_finite()) {
            return Err(ForecastError::InvalidData(
                "series contains NaN or infinite values".to_string(),
            ));
        }
        let n = data.len();
        if n <= self.d + 1 {
            return Err(ForecastError::InsufficientData {
                required: self.d + 2,
                actual: n,
            });
        }

        let w = linalg::difference(data, self.d);
        let (constant, ar, ma) = self.estimate(&w, n)?;

        if ar.iter().map(|c| c.abs()).sum::<f64>() >= 1.0 {
            return Err(ForecastError::NumericalError(
                "AR estimate is not stationary".to_string(),
            ));
        }
        if ma.iter().map(|c| c.abs()).sum::<f64>() >= 1.0 {
            return Err(ForecastError::NumericalError(
                "MA estimate is not invertible".to_string(),
            ));
        }

        let integrated_ar = integrate(&ar, self.d);
        let (fitted, innovations) = filter(data, constant, &integrated_ar, &ma);
        let residuals: Vec<f64> = data.iter().zip(&fitted).map(|(y, f)| y - f).collect();
        if residuals.iter().any(|r| !r.is_finite()) {
            return Err(ForecastError::NumericalError(
                "residuals are not finite".to_string(),
            ));
        }

        let burn_in = (self.p + self.d).min(n);
        let count = n - burn_in;
        let k = 1 + self.p + self.q;
        let ss: f64 = innovations[burn_in..].iter().map(|e| e * e).sum();
        let sigma = (ss / count.saturating_sub(k).max(1) as f64).sqrt();

        debug!(
            p = self.p,
            d = self.d,
            q = self.q,
            constant,
            ?ar,
            ?ma,
            sigma,
            "estimated ARIMA coefficients"
        );

        Ok(ArimaModel {
            p: self.p,
            d: self.d,
            q: self.q,
            constant,
            ar,
            ma,
            integrated_ar,
            sigma,
            history: data.to_vec(),
            fitted,
            residuals,
            innovations,
        })
    }

    /// Hannan-Rissanen estimate of `(c, φ, θ)` on the differenced series.
    fn estimate(&self, w: &[f64], n: usize) -> Result<(f64, Vec<f64>, Vec<f64>)> {
        let (p, q) = (self.p, self.q);
        let nw = w.len();

        // A differenced series without variation is pure drift.
        let var_w = linalg::variance(w);
        let mean_w = linalg::mean(w);
        if var_w <= 1e-12 * (1.0 + mean_w * mean_w) {
            return Ok((mean_w, vec![0.0; p], vec![0.0; q]));
        }

        let long_order = long_ar_order(p, q, nw);
        let innovations = if q > 0 {
            long_ar_innovations(w, long_order)
        } else {
            vec![0.0; nw]
        };

        let k = 1 + p + q;
        let start = regression_start(p, q, nw);
        let rows = nw.saturating_sub(start);
        if rows < k + 3 {
            return Err(ForecastError::InsufficientData {
                required: start + k + 3 + self.d,
                actual: n,
            });
        }

        let mut design = Vec::with_capacity(rows);
        let mut target = Vec::with_capacity(rows);
        for t in start..nw {
            let mut row = Vec::with_capacity(k);
            row.push(1.0);
            row.extend((1..=p).map(|i| w[t - i]));
            row.extend((1..=q).map(|j| innovations[t - j]));
            design.push(row);
            target.push(w[t]);
        }

        let beta = linalg::least_squares(&design, &target)?;
        Ok((beta[0], beta[1..=p].to_vec(), beta[p + 1..].to_vec()))
    }
}

impl Forecaster for ArimaForecaster {
    fn name(&self) -> String {
        format!("ARIMA({},{},{})", self.p, self.d, self.q)
    }

    fn fit(&self, data: &[f64]) -> Result<Box<dyn FittedModel>> {
        Ok(Box::new(self.fit_model(data)?))
    }
}

/// Innovations of a long AR(`order`) fit; zero for the first `order` points.
fn long_ar_innovations(w: &[f64], order: usize) -> Vec<f64> {
    let acov = linalg::autocovariance(w, order);
    let coeffs = linalg::levinson_durbin(&acov, order);
    let mean = linalg::mean(w);

    let mut innovations = vec![0.0; w.len()];
    for t in order..w.len() {
        let predicted: f64 = coeffs
            .iter()
            .enumerate()
            .map(|(i, a)| a * (w[t - i - 1] - mean))
            .sum();
        innovations[t] = (w[t] - mean) - predicted;
    }
    innovations
}

/// Multiply the AR polynomial by `(1 - B)^d` and return the coefficients
/// `a_i` of `y_t = c + Σ a_i y_{t-i} + …` on the original scale.
fn integrate(ar: &[f64], d: usize) -> Vec<f64> {
    // Polynomial in B, constant term first.
    let mut poly: Vec<f64> = std::iter::once(1.0).chain(ar.iter().map(|a| -a)).collect();
    for _ in 0..d {
        let mut next = vec![0.0; poly.len() + 1];
        for (i, c) in poly.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= c;
        }
        poly = next;
    }
    poly[1..].iter().map(|c| -c).collect()
}

/// One-step-ahead predictions over the history.
///
/// The first `p + d` points have no full lag window; they are predicted by
/// the previous value and contribute zero innovations.
fn filter(data: &[f64], constant: f64, integrated_ar: &[f64], ma: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = data.len();
    let burn_in = integrated_ar.len().min(n);
    let mut fitted = vec![0.0; n];
    let mut innovations = vec![0.0; n];

    for t in 0..burn_in {
        fitted[t] = if t == 0 { data[0] } else { data[t - 1] };
    }
    for t in burn_in..n {
        let mut prediction = constant;
        for (i, a) in integrated_ar.iter().enumerate() {
            prediction += a * data[t - i - 1];
        }
        for (j, theta) in ma.iter().enumerate() {
            if t > j {
                prediction += theta * innovations[t - j - 1];
            }
        }
        fitted[t] = prediction;
        innovations[t] = data[t] - prediction;
    }
    (fitted, innovations)
}

/// ARIMA model fitted to a series
#[derive(Debug, Clone, PartialEq)]
pub struct ArimaModel {
    p: usize,
    d: usize,
    q: usize,
    constant: f64,
    ar: Vec<f64>,
    ma: Vec<f64>,
    integrated_ar: Vec<f64>,
    sigma: f64,
    history: Vec<f64>,
    fitted: Vec<f64>,
    residuals: Vec<f64>,
    innovations: Vec<f64>,
}

impl ArimaModel {
    /// Get model orders
    pub fn params(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Constant term on the differenced scale
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Get AR coefficients
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar
    }

    /// Get MA coefficients
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma
    }

    /// Point forecasts for `steps` months; future innovations are zero.
    pub fn predict(&self, steps: usize) -> Vec<f64> {
        let n = self.history.len();
        let mut extended = self.history.clone();
        for h in 0..steps {
            let t = n + h;
            let mut prediction = self.constant;
            for (i, a) in self.integrated_ar.iter().enumerate() {
                prediction += a * extended[t - i - 1];
            }
            for (j, theta) in self.ma.iter().enumerate() {
                let lag = j + 1;
                if lag > h && t >= lag && t - lag < n {
                    prediction += theta * self.innovations[t - lag];
                }
            }
            extended.push(prediction);
        }
        extended.split_off(n)
    }

    /// MA(∞) weights `ψ_0..ψ_{steps-1}` of the integrated model.
    pub fn psi_weights(&self, steps: usize) -> Vec<f64> {
        let mut psi = Vec::with_capacity(steps);
        for j in 0..steps {
            if j == 0 {
                psi.push(1.0);
                continue;
            }
            let mut value = if j <= self.ma.len() { self.ma[j - 1] } else { 0.0 };
            for i in 1..=j.min(self.integrated_ar.len()) {
                value += self.integrated_ar[i - 1] * psi[j - i];
            }
            psi.push(value);
        }
        psi
    }
}

impl FittedModel for ArimaModel {
    fn name(&self) -> String {
        format!("ARIMA({},{},{})", self.p, self.d, self.q)
    }

    fn forecast(&self, horizon: usize, confidence_level: f64) -> Result<ConfidenceInterval> {
        if horizon == 0 {
            return Err(ForecastError::invalid_parameter(
                "horizon",
                "must be at least 1",
            ));
        }
        let points = self.predict(horizon);
        let mut cumulative = 0.0;
        let std_errors: Vec<f64> = self
            .psi_weights(horizon)
            .iter()
            .map(|psi| {
                cumulative += psi * psi;
                self.sigma * cumulative.sqrt()
            })
            .collect();
        confidence::from_standard_errors(points, &std_errors, confidence_level)
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
