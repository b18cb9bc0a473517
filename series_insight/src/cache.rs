//! Presentation-side cache of the summary series.

use chrono::{DateTime, Utc};
use diesel::SqliteConnection;
use summary_sync::{models::SummaryRecord, series, staleness, store::SummaryStore};

/// Explicitly invalidated cache of the last-loaded summary series.
///
/// A UI session keeps one of these instead of refetching the whole store on
/// every interaction. Invalidation is driven solely by the staleness check
/// against the store's update marker, not by any UI-framework state.
#[derive(Default)]
pub struct SeriesCache {
    state: Option<CacheState>,
}

struct CacheState {
    series: Vec<SummaryRecord>,
    fetched_at: DateTime<Utc>,
}

impl SeriesCache {
    /// An empty cache; the first refresh always loads.
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Instant of the last successful load, if any.
    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.state.as_ref().map(|state| state.fetched_at)
    }

    /// Returns the current series, reloading from the store only when the
    /// update marker moved past the last fetch (or nothing was fetched yet).
    pub fn refresh_if_stale(
        &mut self,
        conn: &mut SqliteConnection,
        store: &dyn SummaryStore,
    ) -> anyhow::Result<&[SummaryRecord]> {
        let needs_reload = match &self.state {
            None => true,
            Some(state) => staleness::is_stale(conn, store, Some(state.fetched_at))?,
        };

        if needs_reload {
            let series = series::load_series(conn, store)?;
            self.state = Some(CacheState {
                series,
                fetched_at: Utc::now(),
            });
        }

        Ok(self
            .state
            .as_ref()
            .map(|state| state.series.as_slice())
            .unwrap_or_default())
    }
}
