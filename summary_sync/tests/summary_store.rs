use chrono::{TimeZone, Utc};
use summary_sync::models::SummaryRecord;
use summary_sync::store::{SummaryStore, repo::SqliteStore};

mod common;

fn record(close: f64, hour: u32) -> SummaryRecord {
    SummaryRecord {
        average_open: close - 1.0,
        average_high: close + 2.0,
        average_low: close - 2.0,
        average_close: close,
        total_entries: 4,
        captured_at: Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap(),
    }
}

#[test]
fn find_all_returns_records_ascending_by_capture_instant() {
    let (_db, mut conn) = common::setup_db();
    common::assert_sqlite_pragmas(&mut conn);
    let store = SqliteStore::new();

    // Insert out of order; read order must not depend on write order.
    for hour in [12, 9, 10, 11] {
        store
            .insert_summary(&mut conn, &record(7500.0 + hour as f64, hour))
            .expect("insert");
    }

    let rows = store.find_all(&mut conn).expect("find_all");
    assert_eq!(rows.len(), 4);
    let hours: Vec<u32> = rows
        .iter()
        .map(|r| {
            use chrono::Timelike;
            r.captured_at.hour()
        })
        .collect();
    assert_eq!(hours, vec![9, 10, 11, 12]);
    assert_eq!(rows[0], record(7509.0, 9));
}

#[test]
fn find_all_on_empty_store_is_empty() {
    let (_db, mut conn) = common::setup_db();
    let store = SqliteStore::new();
    assert!(store.find_all(&mut conn).expect("find_all").is_empty());
}

#[test]
fn marker_is_created_then_overwritten_not_appended() {
    let (_db, mut conn) = common::setup_db();
    let store = SqliteStore::new();

    assert_eq!(store.get_marker(&mut conn).expect("read"), None);

    let first = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
    store.set_marker(&mut conn, first).expect("first write");
    assert_eq!(store.get_marker(&mut conn).expect("read"), Some(first));

    let second = Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap();
    store.set_marker(&mut conn, second).expect("second write");
    assert_eq!(store.get_marker(&mut conn).expect("read"), Some(second));

    // Still a single row: the tracker is a singleton by construction.
    use diesel::dsl::count_star;
    use diesel::prelude::*;
    use summary_sync::schema::update_tracker::dsl::*;
    let rows: i64 = update_tracker
        .select(count_star())
        .first(&mut conn)
        .expect("count");
    assert_eq!(rows, 1);
}

#[test]
fn records_survive_a_round_trip_unchanged() {
    let (_db, mut conn) = common::setup_db();
    let store = SqliteStore::new();

    let original = SummaryRecord {
        average_open: 7530.25,
        average_high: 7544.125,
        average_low: 7521.5,
        average_close: 7540.0625,
        total_entries: 8,
        captured_at: Utc.with_ymd_and_hms(2024, 3, 10, 14, 30, 0).unwrap(),
    };
    store.insert_summary(&mut conn, &original).expect("insert");

    let rows = store.find_all(&mut conn).expect("find_all");
    assert_eq!(rows, vec![original]);
}
