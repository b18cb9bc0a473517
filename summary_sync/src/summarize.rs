//! Reduction of one staged artifact into a per-capture summary.

use index_capture::models::artifact::ArtifactData;
use indexmap::IndexMap;

use crate::models::Summary;

/// Computes the arithmetic mean of each price column.
///
/// `total_entries` is the artifact's row count; an empty artifact yields 0.0
/// for every average rather than a division by zero. Deterministic and free
/// of side effects; the capture instant is attached by the caller, never
/// recomputed here.
pub fn summarize(data: &ArtifactData) -> Summary {
    let total_entries = data.len();
    Summary {
        average_open: column_mean(&data.open, total_entries),
        average_high: column_mean(&data.high, total_entries),
        average_low: column_mean(&data.low, total_entries),
        average_close: column_mean(&data.close, total_entries),
        total_entries: total_entries as i64,
    }
}

fn column_mean(column: &IndexMap<String, f64>, total_entries: usize) -> f64 {
    if total_entries == 0 {
        return 0.0;
    }
    column.values().sum::<f64>() / total_entries as f64
}
