//! Render-ready chart payloads.
//!
//! The UI runtime asks for one of three charts (the plain price line, the
//! decomposition components, or the historical-plus-forecast pair) and gets
//! back a serializable payload or an explanatory [`InsightError`]. Undefined
//! points (trend inside the moving-average edges) serialize as `null`.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
use summary_sync::models::SummaryRecord;

use crate::{arima::Arima, column::SeriesColumn, decompose, error::InsightError};

/// One plotted observation; `value: None` marks an undefined point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Observation instant, UTC.
    pub timestamp: DateTime<Utc>,
    /// Plotted value, absent where the component is undefined.
    pub value: Option<f64>,
}

/// A named line within a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Legend label.
    pub name: String,
    /// Points in time order.
    pub points: Vec<ChartPoint>,
}

/// A complete renderable chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    /// Chart title.
    pub title: String,
    /// Y-axis label (the summary column being plotted).
    pub y_label: String,
    /// One or more lines sharing the time axis.
    pub series: Vec<ChartSeries>,
}

/// Fixed (p, d, q) orders of a forecast request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastOrders {
    /// Autoregressive order.
    pub p: usize,
    /// Differencing order.
    pub d: usize,
    /// Moving-average order.
    pub q: usize,
}

/// The average-close line over time, the dashboard's base plot.
pub fn price_chart(series: &[SummaryRecord]) -> Result<ChartPayload, InsightError> {
    if series.is_empty() {
        return Err(InsightError::EmptySeries);
    }

    let column = SeriesColumn::AverageClose;
    let points = aligned_points(series, column.values(series).into_iter().map(Some));

    Ok(ChartPayload {
        title: "Average Close Prices Over Time".to_string(),
        y_label: column.label().to_string(),
        series: vec![ChartSeries {
            name: "Average Close".to_string(),
            points,
        }],
    })
}

/// Trend, seasonal, and residual components of one summary column.
pub fn decomposition_chart(
    series: &[SummaryRecord],
    column: SeriesColumn,
    period: usize,
) -> Result<ChartPayload, InsightError> {
    let values = column.values(series);
    let parts = decompose::decompose(&values, period)?;

    let series = vec![
        ChartSeries {
            name: "Trend".to_string(),
            points: aligned_points(series, parts.trend.into_iter()),
        },
        ChartSeries {
            name: "Seasonal".to_string(),
            points: aligned_points(series, parts.seasonal.into_iter().map(Some)),
        },
        ChartSeries {
            name: "Residual".to_string(),
            points: aligned_points(series, parts.residual.into_iter()),
        },
    ];

    Ok(ChartPayload {
        title: "Time Series Decomposition".to_string(),
        y_label: column.label().to_string(),
        series,
    })
}

/// Historical values plus a fixed-order projection.
///
/// Projected instants continue the series' inferred cadence, strictly
/// increasing past the last observation.
pub fn forecast_chart(
    series: &[SummaryRecord],
    column: SeriesColumn,
    orders: ForecastOrders,
    steps: usize,
) -> Result<ChartPayload, InsightError> {
    let values = column.values(series);

    let mut model = Arima::new(orders.p, orders.d, orders.q);
    model.fit(&values)?;
    let projected = model.forecast(steps)?;

    let cadence = infer_cadence(series).ok_or_else(|| {
        InsightError::ModelFit("cannot infer the series cadence from fewer than two records".to_string())
    })?;
    let last_instant = match series.last() {
        Some(record) => record.captured_at,
        None => return Err(InsightError::EmptySeries),
    };

    let actual = ChartSeries {
        name: "Actual".to_string(),
        points: aligned_points(series, values.into_iter().map(Some)),
    };
    let forecast = ChartSeries {
        name: "Forecast".to_string(),
        points: projected
            .into_iter()
            .enumerate()
            .map(|(i, value)| ChartPoint {
                timestamp: last_instant + cadence * (i as i32 + 1),
                value: Some(value),
            })
            .collect(),
    };

    Ok(ChartPayload {
        title: "ARIMA Forecast".to_string(),
        y_label: column.label().to_string(),
        series: vec![actual, forecast],
    })
}

/// The modal spacing between consecutive records; ties pick the tighter one.
fn infer_cadence(series: &[SummaryRecord]) -> Option<Duration> {
    if series.len() < 2 {
        return None;
    }

    let mut counts: HashMap<i64, usize> = HashMap::new();
    for pair in series.windows(2) {
        let seconds = (pair[1].captured_at - pair[0].captured_at).num_seconds();
        *counts.entry(seconds).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by_key(|&(seconds, count)| (count, std::cmp::Reverse(seconds)))
        .map(|(seconds, _)| Duration::seconds(seconds))
}

fn aligned_points(
    series: &[SummaryRecord],
    values: impl Iterator<Item = Option<f64>>,
) -> Vec<ChartPoint> {
    series
        .iter()
        .zip(values)
        .map(|(record, value)| ChartPoint {
            timestamp: record.captured_at,
            value,
        })
        .collect()
}
