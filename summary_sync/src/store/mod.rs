//! Summary store gateway: records + update marker (SQLite).

use chrono::{DateTime, Utc};

use crate::models::SummaryRecord;

pub mod repo;

/// Store-level failure; aborts the operation that hit it.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The backing database failed or rejected an operation.
    #[error("summary store unavailable: {0}")]
    Unavailable(#[from] diesel::result::Error),
}

/// Result type used throughout the summary store for fallible operations.
pub type StoreResult<T> = anyhow::Result<T>;

/// Portable surface, SQLite implementation lives in `repo.rs`.
///
/// `index_summary` rows are append-only and the marker is a single-row
/// overwrite, so the gateway exposes exactly the four operations the
/// pipeline needs: two writes owned by the ingestion coordinator, two reads
/// for the presentation side.
pub trait SummaryStore {
    /// Appends one per-capture summary record.
    fn insert_summary(
        &self,
        conn: &mut diesel::SqliteConnection,
        record: &SummaryRecord,
    ) -> StoreResult<()>;

    /// Overwrites the update marker with `instant`.
    fn set_marker(
        &self,
        conn: &mut diesel::SqliteConnection,
        instant: DateTime<Utc>,
    ) -> StoreResult<()>;

    /// Returns every summary record, ascending by capture instant.
    fn find_all(&self, conn: &mut diesel::SqliteConnection) -> StoreResult<Vec<SummaryRecord>>;

    /// Reads the update marker; `None` until the first ingestion pass.
    fn get_marker(
        &self,
        conn: &mut diesel::SqliteConnection,
    ) -> StoreResult<Option<DateTime<Utc>>>;
}
