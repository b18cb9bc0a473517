use chrono::{TimeZone, Utc};
use summary_sync::models::SummaryRecord;
use summary_sync::series::load_series;
use summary_sync::store::{SummaryStore, repo::SqliteStore};

mod common;

fn record(close: f64, hour: u32) -> SummaryRecord {
    SummaryRecord {
        average_open: close,
        average_high: close,
        average_low: close,
        average_close: close,
        total_entries: 1,
        captured_at: Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap(),
    }
}

#[test]
fn loader_returns_the_full_series_in_time_order() {
    let (_db, mut conn) = common::setup_db();
    let store = SqliteStore::new();

    for hour in [11, 9, 10] {
        store
            .insert_summary(&mut conn, &record(hour as f64, hour))
            .expect("insert");
    }

    let series = load_series(&mut conn, &store).expect("load");
    let closes: Vec<f64> = series.iter().map(|r| r.average_close).collect();
    assert_eq!(closes, vec![9.0, 10.0, 11.0]);
}

// A crash between store-write and artifact-delete re-ingests the same capture
// instant on the next pass; the loader must collapse that to one row.
#[test]
fn duplicate_capture_instants_collapse_to_the_last_written_row() {
    let (_db, mut conn) = common::setup_db();
    let store = SqliteStore::new();

    store
        .insert_summary(&mut conn, &record(100.0, 9))
        .expect("insert");
    store
        .insert_summary(&mut conn, &record(200.0, 9))
        .expect("re-insert after crash");
    store
        .insert_summary(&mut conn, &record(300.0, 10))
        .expect("insert");

    let series = load_series(&mut conn, &store).expect("load");
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].average_close, 200.0);
    assert_eq!(series[1].average_close, 300.0);
}
