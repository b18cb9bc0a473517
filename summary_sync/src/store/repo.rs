//! SQLite implementation of the summary store gateway.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::{
    models::SummaryRecord,
    schema::index_summary,
    store::{StoreError, StoreResult, SummaryStore},
    time,
};

use crate::schema::index_summary::dsl as summary;
use crate::schema::update_tracker::dsl as tracker;

/// The fixed key of the singleton marker row.
const TRACKER_ROW_ID: i32 = 0;

#[derive(Insertable, Debug)]
#[diesel(table_name = index_summary)]
struct SummaryRow<'a> {
    average_open: f64,
    average_high: f64,
    average_low: f64,
    average_close: f64,
    total_entries: i64,
    captured_at: &'a str, // RFC3339 UTC
}

/// Repository over the `index_summary` and `update_tracker` tables.
pub struct SqliteStore;

impl SqliteStore {
    /// Creates the repository. Connections are passed per call.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SqliteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryStore for SqliteStore {
    fn insert_summary(
        &self,
        conn: &mut SqliteConnection,
        record: &SummaryRecord,
    ) -> StoreResult<()> {
        let captured_at = time::to_rfc3339_millis(record.captured_at);
        let row = SummaryRow {
            average_open: record.average_open,
            average_high: record.average_high,
            average_low: record.average_low,
            average_close: record.average_close,
            total_entries: record.total_entries,
            captured_at: &captured_at,
        };

        diesel::insert_into(summary::index_summary)
            .values(&row)
            .execute(conn)
            .map_err(StoreError::Unavailable)?;

        Ok(())
    }

    fn set_marker(&self, conn: &mut SqliteConnection, instant: DateTime<Utc>) -> StoreResult<()> {
        let stamp = time::to_rfc3339_millis(instant);

        // Single-row upsert: created on first write, overwritten afterwards.
        diesel::insert_into(tracker::update_tracker)
            .values((tracker::id.eq(TRACKER_ROW_ID), tracker::timestamp.eq(&stamp)))
            .on_conflict(tracker::id)
            .do_update()
            .set(tracker::timestamp.eq(&stamp))
            .execute(conn)
            .map_err(StoreError::Unavailable)?;

        Ok(())
    }

    fn find_all(&self, conn: &mut SqliteConnection) -> StoreResult<Vec<SummaryRecord>> {
        let rows: Vec<(f64, f64, f64, f64, i64, String)> = summary::index_summary
            .select((
                summary::average_open,
                summary::average_high,
                summary::average_low,
                summary::average_close,
                summary::total_entries,
                summary::captured_at,
            ))
            .order((summary::captured_at.asc(), summary::id.asc()))
            .load(conn)
            .map_err(StoreError::Unavailable)?;

        rows.into_iter()
            .map(|(open, high, low, close, entries, stamp)| {
                Ok(SummaryRecord {
                    average_open: open,
                    average_high: high,
                    average_low: low,
                    average_close: close,
                    total_entries: entries,
                    captured_at: time::parse_ts_to_utc(&stamp)?,
                })
            })
            .collect()
    }

    fn get_marker(&self, conn: &mut SqliteConnection) -> StoreResult<Option<DateTime<Utc>>> {
        let stamp = tracker::update_tracker
            .find(TRACKER_ROW_ID)
            .select(tracker::timestamp)
            .first::<String>(conn)
            .optional()
            .map_err(StoreError::Unavailable)?;

        stamp.map(|s| time::parse_ts_to_utc(&s)).transpose()
    }
}
