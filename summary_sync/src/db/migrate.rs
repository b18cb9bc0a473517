//! Embedded schema migrations.

use anyhow::anyhow;
use diesel::{Connection, SqliteConnection, connection::SimpleConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Embedded Diesel migrations bundled with this crate.
///
/// These are applied by [`run_sqlite`] to bring the summary store schema up
/// to date.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Runs pending Diesel migrations on the SQLite database at the given URL.
///
/// Accepts a `sqlite:` URL or a bare file path. Sets the journal mode to WAL
/// and applies all embedded migrations, returning an error on failure.
pub fn run_sqlite(url: &str) -> anyhow::Result<()> {
    let mut conn = SqliteConnection::establish(url)?;
    conn.batch_execute("PRAGMA journal_mode=WAL;")?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!(e))?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn migrations_apply_on_temp_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().to_string_lossy().to_string();

        run_sqlite(&path).expect("migration run");

        let mut conn = SqliteConnection::establish(&path).unwrap();

        conn.batch_execute(
            "INSERT INTO update_tracker (id, timestamp) VALUES (0, '2024-01-01T00:00:00.000Z')",
        )
        .unwrap();
    }

    #[test]
    fn tracker_rejects_a_second_row() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().to_string_lossy().to_string();

        run_sqlite(&path).expect("migration run");

        let mut conn = SqliteConnection::establish(&path).unwrap();
        conn.batch_execute(
            "INSERT INTO update_tracker (id, timestamp) VALUES (0, '2024-01-01T00:00:00.000Z')",
        )
        .unwrap();
        let err = conn.batch_execute(
            "INSERT INTO update_tracker (id, timestamp) VALUES (1, '2024-01-02T00:00:00.000Z')",
        );
        assert!(err.is_err(), "CHECK (id = 0) must keep the tracker singleton");
    }
}
