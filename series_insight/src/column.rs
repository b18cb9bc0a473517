//! Selection of one summary column as a plain value series.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use summary_sync::models::SummaryRecord;

/// The summary column an analytics request operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeriesColumn {
    /// Mean opening price per capture.
    AverageOpen,
    /// Mean high price per capture.
    AverageHigh,
    /// Mean low price per capture.
    AverageLow,
    /// Mean closing price per capture.
    #[default]
    AverageClose,
}

impl SeriesColumn {
    /// Extracts this column from the series, in series order.
    pub fn values(&self, series: &[SummaryRecord]) -> Vec<f64> {
        series
            .iter()
            .map(|record| match self {
                SeriesColumn::AverageOpen => record.average_open,
                SeriesColumn::AverageHigh => record.average_high,
                SeriesColumn::AverageLow => record.average_low,
                SeriesColumn::AverageClose => record.average_close,
            })
            .collect()
    }

    /// The stored field name, used to label chart axes.
    pub fn label(&self) -> &'static str {
        match self {
            SeriesColumn::AverageOpen => "average_open",
            SeriesColumn::AverageHigh => "average_high",
            SeriesColumn::AverageLow => "average_low",
            SeriesColumn::AverageClose => "average_close",
        }
    }
}
