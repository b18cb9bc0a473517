use std::path::PathBuf;

use chrono::{Duration, TimeZone, Utc};
use diesel::SqliteConnection;
use series_insight::cache::SeriesCache;
use series_insight::charts::{self, ForecastOrders};
use series_insight::column::SeriesColumn;
use summary_sync::db::{connection, migrate};
use summary_sync::models::SummaryRecord;
use summary_sync::store::{SummaryStore, repo::SqliteStore};
use tempfile::TempDir;

struct TestDb {
    _dir: TempDir,
}

fn setup_db() -> (TestDb, SqliteConnection) {
    let dir = TempDir::new().expect("tempdir");
    let mut path = PathBuf::from(dir.path());
    path.push("insight.db");
    let path = path.to_string_lossy().to_string();

    migrate::run_sqlite(&path).expect("migrations");
    let conn = connection::connect_sqlite(&path).expect("connect");
    (TestDb { _dir: dir }, conn)
}

fn seed_hourly_records(
    conn: &mut SqliteConnection,
    store: &SqliteStore,
    count: usize,
) -> Vec<SummaryRecord> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let records: Vec<SummaryRecord> = (0..count)
        .map(|i| {
            let close = 7500.0 + (i as f64 % 12.0) * 3.0 + i as f64 * 0.5;
            SummaryRecord {
                average_open: close - 2.0,
                average_high: close + 4.0,
                average_low: close - 4.0,
                average_close: close,
                total_entries: 8,
                captured_at: base + Duration::hours(i as i64),
            }
        })
        .collect();

    for record in &records {
        store.insert_summary(conn, record).expect("insert");
    }
    store
        .set_marker(conn, Utc::now())
        .expect("marker after batch");
    records
}

#[test]
fn cache_reloads_only_when_the_marker_moves() {
    let (_db, mut conn) = setup_db();
    let store = SqliteStore::new();
    seed_hourly_records(&mut conn, &store, 5);

    let mut cache = SeriesCache::new();
    assert_eq!(cache.last_fetch(), None);
    let loaded = cache.refresh_if_stale(&mut conn, &store).expect("refresh");
    assert_eq!(loaded.len(), 5);
    let fetched_at = cache.last_fetch().expect("fetched");

    // A new record lands without a marker update (mid-pass from the cache's
    // point of view): the cache must keep serving its snapshot.
    let extra = SummaryRecord {
        average_open: 1.0,
        average_high: 1.0,
        average_low: 1.0,
        average_close: 1.0,
        total_entries: 1,
        captured_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
    };
    store.insert_summary(&mut conn, &extra).expect("insert");
    let cached = cache.refresh_if_stale(&mut conn, &store).expect("refresh");
    assert_eq!(cached.len(), 5, "marker unchanged, cache must not reload");
    assert_eq!(cache.last_fetch(), Some(fetched_at));

    // The pass completes and advances the marker: next refresh reloads.
    store
        .set_marker(&mut conn, fetched_at + Duration::seconds(1))
        .expect("marker");
    let reloaded = cache.refresh_if_stale(&mut conn, &store).expect("refresh");
    assert_eq!(reloaded.len(), 6);
}

#[test]
fn decomposition_over_a_stored_series() {
    let (_db, mut conn) = setup_db();
    let store = SqliteStore::new();
    seed_hourly_records(&mut conn, &store, 36);

    let mut cache = SeriesCache::new();
    let series = cache
        .refresh_if_stale(&mut conn, &store)
        .expect("refresh")
        .to_vec();

    let payload =
        charts::decomposition_chart(&series, SeriesColumn::AverageClose, 12).expect("chart");
    assert_eq!(payload.series.len(), 3);
    for component in &payload.series {
        assert_eq!(component.points.len(), 36);
    }
}

#[test]
fn forecast_over_a_stored_series() {
    let (_db, mut conn) = setup_db();
    let store = SqliteStore::new();
    seed_hourly_records(&mut conn, &store, 36);

    let mut cache = SeriesCache::new();
    let series = cache
        .refresh_if_stale(&mut conn, &store)
        .expect("refresh")
        .to_vec();

    let payload = charts::forecast_chart(
        &series,
        SeriesColumn::AverageClose,
        ForecastOrders { p: 1, d: 1, q: 1 },
        12,
    )
    .expect("chart");

    let forecast = &payload.series[1];
    assert_eq!(forecast.points.len(), 12);
    let last_observed = series.last().expect("series").captured_at;
    assert!(forecast.points[0].timestamp == last_observed + Duration::hours(1));
    assert!(forecast
        .points
        .windows(2)
        .all(|pair| pair[1].timestamp - pair[0].timestamp == Duration::hours(1)));
}

#[test]
fn short_series_yields_an_explanatory_error_not_a_crash() {
    let (_db, mut conn) = setup_db();
    let store = SqliteStore::new();
    seed_hourly_records(&mut conn, &store, 6);

    let mut cache = SeriesCache::new();
    let series = cache
        .refresh_if_stale(&mut conn, &store)
        .expect("refresh")
        .to_vec();

    let err = charts::decomposition_chart(&series, SeriesColumn::AverageClose, 12).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Not enough data for decomposition. Required: 24, Available: 6"
    );
}
