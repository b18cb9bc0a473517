//! Cheap "has anything changed since my last fetch" check.

use chrono::{DateTime, Utc};
use diesel::SqliteConnection;

use crate::store::SummaryStore;

/// Compares the store's update marker against a client-held fetch instant.
///
/// Returns `true` when the marker is strictly newer than `last_fetch`, or
/// when the caller has never fetched. A store without a marker has never been
/// written to, so there is nothing new to fetch and the answer is `false`.
/// Because the marker only moves forward, the signal is monotonic: once a
/// fetch instant is stale it stays stale until the caller refetches.
pub fn is_stale(
    conn: &mut SqliteConnection,
    store: &dyn SummaryStore,
    last_fetch: Option<DateTime<Utc>>,
) -> anyhow::Result<bool> {
    Ok(match store.get_marker(conn)? {
        None => false,
        Some(marker) => match last_fetch {
            None => true,
            Some(fetched_at) => marker > fetched_at,
        },
    })
}
