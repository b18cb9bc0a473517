//! Fixed-order ARIMA forecasting.
//!
//! `Arima::new(p, d, q)` differs from a full statistics package on purpose:
//! orders are given, never searched, and a series the orders cannot be
//! estimated on is an error rather than a fallback. Estimation is the
//! two-stage Hannan-Rissanen scheme: a long autoregression supplies shock
//! proxies, then one least-squares pass regresses the differenced,
//! mean-centered series on its own lags and the lagged shocks. The dense
//! systems involved are tiny (p+q unknowns), solved by Gaussian elimination
//! in-crate.

use crate::error::InsightError;

/// Variance below this is treated as a constant series.
const DEGENERATE_EPS: f64 = 1e-10;

/// Pivots below this mean the normal equations are singular.
const PIVOT_EPS: f64 = 1e-12;

/// An autoregressive integrated moving-average model with fixed orders.
///
/// Fit once over the historical column values, then project with
/// [`forecast`](Arima::forecast). Both steps are deterministic.
#[derive(Debug, Clone)]
pub struct Arima {
    p: usize,
    d: usize,
    q: usize,
    mean: f64,
    phi: Vec<f64>,
    theta: Vec<f64>,
    z_tail: Vec<f64>,
    e_tail: Vec<f64>,
    level_tails: Vec<f64>,
    fitted: bool,
}

impl Arima {
    /// Creates an unfitted model with autoregressive order `p`, differencing
    /// order `d`, and moving-average order `q`.
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self {
            p,
            d,
            q,
            mean: 0.0,
            phi: Vec::new(),
            theta: Vec::new(),
            z_tail: Vec::new(),
            e_tail: Vec::new(),
            level_tails: Vec::new(),
            fitted: false,
        }
    }

    /// Whether [`fit`](Arima::fit) has succeeded on this instance.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Fits the model to `data`, oldest observation first.
    ///
    /// # Errors
    /// [`InsightError::ModelFit`] when the series is too short for the given
    /// orders, is degenerate (constant after differencing) while AR or MA
    /// terms were requested, or yields singular normal equations.
    pub fn fit(&mut self, data: &[f64]) -> Result<(), InsightError> {
        let (p, d, q) = (self.p, self.d, self.q);

        let proxy_order = if q > 0 { p.max(q) + 1 } else { 0 };
        let burn_in = p.max(q).max(proxy_order);
        let needed = d + burn_in + p + q + 2;
        if data.len() < needed {
            return Err(InsightError::ModelFit(format!(
                "series too short: {} observations, need at least {needed} for orders ({p},{d},{q})",
                data.len()
            )));
        }

        // Difference d times, remembering the last level at each depth so the
        // forecast can be integrated back.
        let mut w: Vec<f64> = data.to_vec();
        let mut level_tails = Vec::with_capacity(d);
        for _ in 0..d {
            let last = *w.last().ok_or_else(|| {
                InsightError::ModelFit("series exhausted while differencing".to_string())
            })?;
            level_tails.push(last);
            w = w.windows(2).map(|pair| pair[1] - pair[0]).collect();
        }

        let n = w.len();
        let mean = w.iter().sum::<f64>() / n as f64;
        let z: Vec<f64> = w.iter().map(|value| value - mean).collect();

        let mut phi = Vec::new();
        let mut theta = Vec::new();
        let mut shocks = vec![0.0; n];

        if p + q > 0 {
            let variance = z.iter().map(|value| value * value).sum::<f64>() / n as f64;
            if variance < DEGENERATE_EPS {
                return Err(InsightError::ModelFit(format!(
                    "degenerate (constant) series for orders ({p},{d},{q})"
                )));
            }

            // Stage one: shock proxies from a long autoregression.
            let proxies = if q > 0 {
                let coefficients = fit_lagged_regression(&z, None, proxy_order, 0)?;
                lagged_residuals(&z, &coefficients, &[])
            } else {
                vec![0.0; n]
            };

            // Stage two: the actual (p, q) regression.
            let beta = fit_lagged_regression(&z, Some(&proxies), p, q)?;
            phi = beta[..p].to_vec();
            theta = beta[p..].to_vec();

            // Recompute shocks under the final model for the forecast tail.
            shocks = lagged_residuals(&z, &phi, &theta);
        }

        self.mean = mean;
        self.phi = phi;
        self.theta = theta;
        self.z_tail = z[n - p..].to_vec();
        self.e_tail = shocks[n - q..].to_vec();
        self.level_tails = level_tails;
        self.fitted = true;
        Ok(())
    }

    /// Projects `steps` values beyond the fitted series.
    ///
    /// Future shocks enter at zero, forecasts feed back into their own lags,
    /// and the result is integrated `d` times back to level terms.
    pub fn forecast(&self, steps: usize) -> Result<Vec<f64>, InsightError> {
        if !self.fitted {
            return Err(InsightError::ModelFit(
                "forecast requested before fit".to_string(),
            ));
        }

        let mut z_forecast: Vec<f64> = Vec::with_capacity(steps);
        for k in 1..=steps {
            let mut value = 0.0;
            for i in 1..=self.p {
                let lagged = if i < k {
                    z_forecast[k - 1 - i]
                } else {
                    self.z_tail[self.z_tail.len() - 1 - (i - k)]
                };
                value += self.phi[i - 1] * lagged;
            }
            for j in 1..=self.q {
                if j >= k {
                    let back = j - k;
                    if back < self.e_tail.len() {
                        value += self.theta[j - 1] * self.e_tail[self.e_tail.len() - 1 - back];
                    }
                }
            }
            z_forecast.push(value);
        }

        let mut current: Vec<f64> = z_forecast
            .into_iter()
            .map(|value| value + self.mean)
            .collect();
        for tail in self.level_tails.iter().rev() {
            let mut running = *tail;
            current = current
                .into_iter()
                .map(|delta| {
                    running += delta;
                    running
                })
                .collect();
        }

        Ok(current)
    }
}

/// One-step-ahead residuals of an ARMA recursion over `z`.
///
/// Lags that reach before the start of the series contribute zero.
fn lagged_residuals(z: &[f64], phi: &[f64], theta: &[f64]) -> Vec<f64> {
    let mut residuals = vec![0.0; z.len()];
    for t in 0..z.len() {
        let mut predicted = 0.0;
        for (i, coefficient) in phi.iter().enumerate() {
            if t > i {
                predicted += coefficient * z[t - 1 - i];
            }
        }
        for (j, coefficient) in theta.iter().enumerate() {
            if t > j {
                predicted += coefficient * residuals[t - 1 - j];
            }
        }
        residuals[t] = z[t] - predicted;
    }
    residuals
}

/// Least-squares fit of `z[t]` on its own `p` lags and `q` lagged shocks,
/// via the normal equations.
fn fit_lagged_regression(
    z: &[f64],
    shocks: Option<&[f64]>,
    p: usize,
    q: usize,
) -> Result<Vec<f64>, InsightError> {
    let burn_in = p.max(q);
    let n = z.len();
    let unknowns = p + q;

    let mut xtx = vec![vec![0.0; unknowns]; unknowns];
    let mut xty = vec![0.0; unknowns];
    let mut row = vec![0.0; unknowns];

    for t in burn_in..n {
        for i in 1..=p {
            row[i - 1] = z[t - i];
        }
        if let Some(shocks) = shocks {
            for j in 1..=q {
                row[p + j - 1] = shocks[t - j];
            }
        }
        for a in 0..unknowns {
            xty[a] += row[a] * z[t];
            for b in 0..unknowns {
                xtx[a][b] += row[a] * row[b];
            }
        }
    }

    solve_linear_system(xtx, xty)
        .ok_or_else(|| InsightError::ModelFit("normal equations are singular".to_string()))
}

/// Gaussian elimination with partial pivoting; `None` on a vanishing pivot.
fn solve_linear_system(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();

    for col in 0..n {
        let mut pivot = col;
        for r in col + 1..n {
            if a[r][col].abs() > a[pivot][col].abs() {
                pivot = r;
            }
        }
        if a[pivot][col].abs() < PIVOT_EPS {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for r in col + 1..n {
            let factor = a[r][col] / a[col][col];
            for c in col..n {
                a[r][c] -= factor * a[col][c];
            }
            b[r] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for r in (0..n).rev() {
        let mut acc = b[r];
        for c in r + 1..n {
            acc -= a[r][c] * x[c];
        }
        x[r] = acc / a[r][r];
    }
    Some(x)
}
