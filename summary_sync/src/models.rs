//! Core records of the summary store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The reduced representation of one staged artifact, before its capture
/// instant is attached.
///
/// Produced by [`summarize`](crate::summarize::summarize); the ingestion
/// coordinator pairs it with the instant parsed from the artifact name.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Arithmetic mean of the opening prices.
    pub average_open: f64,
    /// Arithmetic mean of the high prices.
    pub average_high: f64,
    /// Arithmetic mean of the low prices.
    pub average_low: f64,
    /// Arithmetic mean of the closing prices.
    pub average_close: f64,
    /// Number of bars the artifact held.
    pub total_entries: i64,
}

impl Summary {
    /// Attaches the capture instant, yielding the persistable record.
    pub fn into_record(self, captured_at: DateTime<Utc>) -> SummaryRecord {
        SummaryRecord {
            average_open: self.average_open,
            average_high: self.average_high,
            average_low: self.average_low,
            average_close: self.average_close,
            total_entries: self.total_entries,
            captured_at,
        }
    }
}

/// One persisted per-capture summary. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Arithmetic mean of the opening prices.
    pub average_open: f64,
    /// Arithmetic mean of the high prices.
    pub average_high: f64,
    /// Arithmetic mean of the low prices.
    pub average_low: f64,
    /// Arithmetic mean of the closing prices.
    pub average_close: f64,
    /// Number of bars the source artifact held.
    pub total_entries: i64,
    /// When the source capture was taken (minute precision, UTC).
    pub captured_at: DateTime<Utc>,
}
