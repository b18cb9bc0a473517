use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use summary_sync::db::{connection, migrate};
use summary_sync::ingest;
use summary_sync::store::repo::SqliteStore;

#[derive(Parser)]
#[command(version, about = "Summary Sync CLI")]
struct Cli {
    /// Staging directory holding captured snapshot artifacts
    #[arg(long, value_name = "DIR")]
    staging_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let db_url = shared_utils::env::get_env_var("DATABASE_URL")?;
    migrate::run_sqlite(&db_url)?;
    let mut conn = connection::connect_sqlite(&db_url)?;

    let store = SqliteStore::new();
    let report = ingest::run_pass(&cli.staging_dir, &mut conn, &store)?;

    tracing::info!(
        processed = report.processed,
        skipped = report.skipped,
        "ingestion pass complete"
    );

    Ok(())
}
