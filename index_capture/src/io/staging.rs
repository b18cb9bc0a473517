use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use snafu::ResultExt;

use crate::{
    io::sink::{EncodeSnafu, IoSnafu, SnapshotError, SnapshotSink},
    models::{
        artifact::{ArtifactData, ArtifactId},
        bar::Bar,
    },
};

/// Lands each capture as one JSON artifact in a staging directory.
///
/// The file name is deterministic in the capture instant at minute precision
/// (see [`ArtifactId`]), so a retried or concurrent capture within the same
/// minute overwrites its predecessor instead of duplicating it.
pub struct StagingDirSink {
    staging_dir: PathBuf,
}

impl StagingDirSink {
    /// Creates a sink over the given staging directory.
    ///
    /// The directory is created on first write if it does not exist.
    pub fn new(staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            staging_dir: staging_dir.into(),
        }
    }

    /// Stages `bars` under the artifact name derived from `captured_at`.
    ///
    /// This is the whole write path; the [`SnapshotSink`] impl stamps the
    /// current instant and delegates here.
    pub fn write_snapshot(
        &self,
        bars: &[Bar],
        captured_at: DateTime<Utc>,
    ) -> Result<PathBuf, SnapshotError> {
        if !self.staging_dir.exists() {
            fs::create_dir_all(&self.staging_dir).context(IoSnafu)?;
        }

        let id = ArtifactId::new(captured_at);
        let data = ArtifactData::from_bars(bars);
        let encoded = serde_json::to_string(&data).context(EncodeSnafu)?;

        let path = self.staging_dir.join(id.file_name());
        fs::write(&path, encoded).context(IoSnafu)?;

        Ok(path)
    }
}

#[async_trait]
impl SnapshotSink for StagingDirSink {
    type Output = PathBuf;

    async fn write(&self, bars: &[Bar]) -> Result<PathBuf, SnapshotError> {
        self.write_snapshot(bars, Utc::now())
    }
}
