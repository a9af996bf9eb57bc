//! Dense linear algebra for model estimation.
//!
//! Systems here are tiny (a handful of coefficients), so plain Gaussian
//! elimination is sufficient.

use forecast_spi::{ForecastError, Result};

const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Arithmetic mean; zero for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance (divides by `n`).
pub fn variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64
}

/// Apply `order` rounds of first differencing.
pub fn difference(data: &[f64], order: usize) -> Vec<f64> {
    let mut result = data.to_vec();
    for _ in 0..order {
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

/// Sample autocovariances of the mean-centred series for lags `0..=max_lag`.
///
/// Uses the biased `1/n` estimator, which keeps the Toeplitz matrix
/// positive semi-definite.
pub fn autocovariance(data: &[f64], max_lag: usize) -> Vec<f64> {
    let n = data.len();
    if n == 0 {
        return vec![0.0; max_lag + 1];
    }
    let m = mean(data);
    let centered: Vec<f64> = data.iter().map(|x| x - m).collect();
    (0..=max_lag)
        .map(|k| {
            if k >= n {
                return 0.0;
            }
            centered[k..]
                .iter()
                .zip(&centered[..n - k])
                .map(|(a, b)| a * b)
                .sum::<f64>()
                / n as f64
        })
        .collect()
}

/// Solve the Yule-Walker equations for an AR(`order`) model with the
/// Levinson-Durbin recursion.
///
/// `acov` must hold autocovariances for lags `0..=order`. Returns zeros when
/// the series has no variance.
pub fn levinson_durbin(acov: &[f64], order: usize) -> Vec<f64> {
    let mut phi = vec![0.0; order];
    if order == 0 || acov.len() <= order || acov[0] <= f64::EPSILON {
        return phi;
    }

    let mut err = acov[0];
    for k in 0..order {
        let mut acc = acov[k + 1];
        for j in 0..k {
            acc -= phi[j] * acov[k - j];
        }
        let kappa = acc / err;
        let prev = phi.clone();
        phi[k] = kappa;
        for j in 0..k {
            phi[j] = prev[j] - kappa * prev[k - 1 - j];
        }
        err *= 1.0 - kappa * kappa;
        if err <= acov[0] * SINGULAR_TOLERANCE {
            break;
        }
    }
    phi
}

/// Solve `a · x = b` by Gaussian elimination with partial pivoting.
///
/// Fails with [`ForecastError::NumericalError`] when a pivot is negligible
/// relative to the largest entry of `a`.
pub fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();
    if a.len() != n || a.iter().any(|row| row.len() != n) {
        return Err(ForecastError::NumericalError(
            "system matrix is not square".to_string(),
        ));
    }

    let scale = a
        .iter()
        .flat_map(|row| row.iter())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let tolerance = scale * SINGULAR_TOLERANCE;

    for col in 0..n {
        let mut pivot = col;
        for row in (col + 1)..n {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if !(a[pivot][col].abs() > tolerance) {
            return Err(ForecastError::NumericalError(
                "singular normal equations".to_string(),
            ));
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = ((row + 1)..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Ok(x)
}

/// Ordinary least squares through the normal equations `XᵀX β = Xᵀy`.
pub fn least_squares(design: &[Vec<f64>], target: &[f64]) -> Result<Vec<f64>> {
    let k = design.first().map(Vec::len).unwrap_or(0);
    if k == 0 || design.len() != target.len() {
        return Err(ForecastError::NumericalError(
            "design matrix does not match target".to_string(),
        ));
    }

    let mut xtx = vec![vec![0.0; k]; k];
    let mut xty = vec![0.0; k];
    for (row, &y) in design.iter().zip(target) {
        for i in 0..k {
            xty[i] += row[i] * y;
            for j in 0..k {
                xtx[i][j] += row[i] * row[j];
            }
        }
    }
    solve(xtx, xty)
}
