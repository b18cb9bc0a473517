//! One ingestion pass over the staging area.
//!
//! The pass is the unit of work of the scheduled sync process: every staged
//! artifact is summarized, persisted, and removed, independently of the
//! others. A bad artifact is skipped and reported; a store failure aborts the
//! pass and leaves the remaining artifacts staged for the next run. The
//! update marker is advanced once at the end of the pass, including a pass
//! that found nothing to process, which downstream readers treat as a
//! heartbeat.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use diesel::SqliteConnection;
use index_capture::models::artifact::{ArtifactData, ArtifactId};

use crate::{store::SummaryStore, summarize};

/// Outcome of one ingestion pass, for operator logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassReport {
    /// Artifacts summarized, persisted, and removed.
    pub processed: usize,
    /// Artifacts skipped because their name or content was unusable.
    pub skipped: usize,
}

/// Processes every artifact currently staged under `staging_dir`.
///
/// Per-artifact failures (unparsable name, unreadable or malformed content)
/// are logged and skipped without aborting the rest of the pass. Store
/// failures propagate immediately: the batch fails, unprocessed artifacts
/// stay staged, and the marker is not advanced.
pub fn run_pass(
    staging_dir: &Path,
    conn: &mut SqliteConnection,
    store: &dyn SummaryStore,
) -> anyhow::Result<PassReport> {
    let mut report = PassReport::default();

    let entries = fs::read_dir(staging_dir)
        .with_context(|| format!("read staging dir {}", staging_dir.display()))?;

    for entry in entries {
        let entry = entry
            .with_context(|| format!("list staging dir {}", staging_dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => {
                tracing::warn!(path = %path.display(), "skipping non-UTF-8 staging entry");
                report.skipped += 1;
                continue;
            }
        };

        let id = match ArtifactId::parse(&name) {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(artifact = %name, error = %err, "skipping artifact with invalid name");
                report.skipped += 1;
                continue;
            }
        };

        let data = match read_artifact(&path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(artifact = %name, error = %err, "skipping unreadable artifact");
                report.skipped += 1;
                continue;
            }
        };

        let record = summarize::summarize(&data).into_record(id.captured_at());
        store.insert_summary(conn, &record)?;

        if let Err(err) = fs::remove_file(&path) {
            // The record is already persisted; the series loader collapses
            // duplicate capture instants if a retry re-processes this file.
            tracing::warn!(artifact = %name, error = %err, "failed to delete processed artifact");
        }

        report.processed += 1;
        tracing::info!(artifact = %name, entries = record.total_entries, "artifact summarized");
    }

    store.set_marker(conn, Utc::now())?;
    Ok(report)
}

fn read_artifact(path: &Path) -> anyhow::Result<ArtifactData> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
