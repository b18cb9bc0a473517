//! Additive time-series decomposition.
//!
//! Standard moving-average decomposition: a centered moving-average trend, a
//! per-position seasonal component centered to sum to zero over one cycle,
//! and whatever is left as residual. Trend and residual are undefined inside
//! the half-window at both edges; callers must tolerate the `None`s.

use crate::error::InsightError;

/// Decomposed components, each aligned index-for-index with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    /// Centered moving-average trend; `None` at the series edges.
    pub trend: Vec<Option<f64>>,
    /// Seasonal component, one value per input observation.
    pub seasonal: Vec<f64>,
    /// Input minus trend minus seasonal; `None` where trend is undefined.
    pub residual: Vec<Option<f64>>,
}

/// Splits `values` into trend, seasonal, and residual components.
///
/// `period` is the number of observations per seasonal cycle. The series must
/// hold at least two full cycles; anything shorter fails with
/// [`InsightError::InsufficientData`], a hard guard rather than a degraded mode.
pub fn decompose(values: &[f64], period: usize) -> Result<Decomposition, InsightError> {
    if period < 2 {
        return Err(InsightError::ModelFit(format!(
            "decomposition period must be at least 2, got {period}"
        )));
    }

    let n = values.len();
    let required = 2 * period;
    if n < required {
        return Err(InsightError::InsufficientData {
            required,
            available: n,
        });
    }

    let trend = moving_average_trend(values, period);

    // Seasonal: average the detrended values at each cycle position, then
    // center the cycle so the seasonal component carries no level.
    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (i, t) in trend.iter().enumerate() {
        if let Some(t) = t {
            sums[i % period] += values[i] - t;
            counts[i % period] += 1;
        }
    }
    let mut cycle: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(sum, &count)| if count == 0 { 0.0 } else { sum / count as f64 })
        .collect();
    let level = cycle.iter().sum::<f64>() / period as f64;
    for value in &mut cycle {
        *value -= level;
    }

    let seasonal: Vec<f64> = (0..n).map(|i| cycle[i % period]).collect();
    let residual: Vec<Option<f64>> = (0..n)
        .map(|i| trend[i].map(|t| values[i] - t - seasonal[i]))
        .collect();

    Ok(Decomposition {
        trend,
        seasonal,
        residual,
    })
}

/// Centered moving average over one seasonal cycle.
///
/// Even periods use the 2x-weighted window (half weight on both ends) so the
/// average stays centered on the observation.
fn moving_average_trend(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let half = period / 2;
    let mut trend: Vec<Option<f64>> = vec![None; n];

    if period % 2 == 0 {
        for i in half..n - half {
            let mut acc = 0.5 * (values[i - half] + values[i + half]);
            for value in &values[i - half + 1..i + half] {
                acc += value;
            }
            trend[i] = Some(acc / period as f64);
        }
    } else {
        for i in half..n - half {
            let acc: f64 = values[i - half..=i + half].iter().sum();
            trend[i] = Some(acc / period as f64);
        }
    }

    trend
}
