//! Full reload of the summary series.

use diesel::SqliteConnection;

use crate::{models::SummaryRecord, store::SummaryStore};

/// Loads every summary record, ascending by capture instant.
///
/// No filtering or windowing: records are small and store growth is bounded
/// by the capture cadence. Records sharing a capture instant (possible only
/// when a crash between store-write and artifact-delete forced a
/// re-ingestion) collapse to the last-written row.
pub fn load_series(
    conn: &mut SqliteConnection,
    store: &dyn SummaryStore,
) -> anyhow::Result<Vec<SummaryRecord>> {
    let rows = store.find_all(conn)?;

    let mut series: Vec<SummaryRecord> = Vec::with_capacity(rows.len());
    for record in rows {
        match series.last_mut() {
            Some(last) if last.captured_at == record.captured_at => *last = record,
            _ => series.push(record),
        }
    }
    Ok(series)
}
