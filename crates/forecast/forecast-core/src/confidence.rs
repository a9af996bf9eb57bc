//! Confidence interval implementations
//!
//! Provides the normal quantile function and builds prediction intervals
//! from per-step standard errors.

use forecast_spi::{ConfidenceInterval, ForecastError, Result};

// Rational approximation of the inverse normal CDF (P. J. Acklam),
// relative error below 1.15e-9 over the whole domain.
const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];
const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];
const P_LOW: f64 = 0.02425;

/// Inverse of the standard normal CDF for `p` in `(0, 1)`.
pub fn normal_quantile(p: f64) -> Result<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(ForecastError::invalid_parameter(
            "probability",
            "must be strictly between 0 and 1",
        ));
    }

    let z = if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };
    Ok(z)
}

/// Two-sided critical value for a confidence level, e.g. 1.96 for 0.95.
pub fn z_value(confidence_level: f64) -> Result<f64> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(ForecastError::invalid_parameter(
            "confidence_level",
            "must be strictly between 0 and 1",
        ));
    }
    normal_quantile((1.0 + confidence_level) / 2.0)
}

/// Create an interval from point forecasts and per-step standard errors.
pub fn from_standard_errors(
    forecast: Vec<f64>,
    std_errors: &[f64],
    confidence_level: f64,
) -> Result<ConfidenceInterval> {
    if forecast.len() != std_errors.len() {
        return Err(ForecastError::InvalidData(format!(
            "{} forecasts but {} standard errors",
            forecast.len(),
            std_errors.len()
        )));
    }
    let z = z_value(confidence_level)?;

    let lower = forecast
        .iter()
        .zip(std_errors)
        .map(|(&f, &se)| f - z * se)
        .collect();
    let upper = forecast
        .iter()
        .zip(std_errors)
        .map(|(&f, &se)| f + z * se)
        .collect();

    Ok(ConfidenceInterval {
        forecast,
        lower,
        upper,
        confidence_level,
    })
}

/// Random-walk bands: the standard error grows with `sqrt(h)`.
pub fn from_residuals(
    forecast: Vec<f64>,
    sigma: f64,
    confidence_level: f64,
) -> Result<ConfidenceInterval> {
    let std_errors: Vec<f64> = (0..forecast.len())
        .map(|h| sigma * ((h + 1) as f64).sqrt())
        .collect();
    from_standard_errors(forecast, &std_errors, confidence_level)
}
