//! Staged-artifact identity and content codec.
//!
//! One capture lands in the staging area as a single JSON artifact. Its file
//! name carries the capture instant at minute precision, so repeated writes
//! within the same minute overwrite rather than duplicate, and the ingestion
//! stage recovers the instant by parsing the name instead of trusting file
//! metadata. [`ArtifactId`] owns both directions of that convention; nothing
//! else in the workspace is allowed to know the naming pattern.

use chrono::{DateTime, Duration, DurationRound, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::bar::Bar;

/// File-name prefix of every staged artifact.
pub const ARTIFACT_PREFIX: &str = "cac40_hourly";

/// File-name extension of every staged artifact.
pub const ARTIFACT_EXT: &str = "json";

/// Capture-instant stamp embedded in artifact names, minute precision.
const CAPTURE_INSTANT_FORMAT: &str = "%d-%m-%Y-%H:%M";

/// A staged artifact's name failed validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArtifactNameError {
    /// The name does not match `<prefix>_<DD-MM-YYYY-HH:MM>.json`.
    #[error("artifact name `{name}` does not match the staged snapshot pattern")]
    Pattern {
        /// The offending file name.
        name: String,
    },

    /// The stamp between prefix and extension is not a valid capture instant.
    #[error("artifact name `{name}` has an invalid capture instant: {source}")]
    Instant {
        /// The offending file name.
        name: String,
        /// The underlying timestamp parse failure.
        source: chrono::ParseError,
    },
}

/// Validated identity of one staged artifact.
///
/// Renders `capture instant -> file name` for the snapshot writer and parses
/// `file name -> capture instant` for the ingestion coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactId {
    captured_at: DateTime<Utc>,
}

impl ArtifactId {
    /// Creates an identity for a capture taken at `captured_at`.
    ///
    /// The instant is truncated to minute precision, matching what the file
    /// name can carry.
    pub fn new(captured_at: DateTime<Utc>) -> Self {
        let truncated = captured_at
            .duration_trunc(Duration::minutes(1))
            .unwrap_or(captured_at);
        Self {
            captured_at: truncated,
        }
    }

    /// The capture instant this artifact represents, minute precision, UTC.
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Renders the staging file name for this artifact.
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}.{}",
            ARTIFACT_PREFIX,
            self.captured_at.format(CAPTURE_INSTANT_FORMAT),
            ARTIFACT_EXT
        )
    }

    /// Parses a staging file name back into an artifact identity.
    ///
    /// # Errors
    /// [`ArtifactNameError::Pattern`] if prefix or extension do not match,
    /// [`ArtifactNameError::Instant`] if the embedded stamp is not a valid
    /// `DD-MM-YYYY-HH:MM` instant.
    pub fn parse(file_name: &str) -> Result<Self, ArtifactNameError> {
        let stamp = file_name
            .strip_prefix(ARTIFACT_PREFIX)
            .and_then(|rest| rest.strip_prefix('_'))
            .and_then(|rest| rest.strip_suffix(ARTIFACT_EXT))
            .and_then(|rest| rest.strip_suffix('.'))
            .ok_or_else(|| ArtifactNameError::Pattern {
                name: file_name.to_string(),
            })?;

        let naive = NaiveDateTime::parse_from_str(stamp, CAPTURE_INSTANT_FORMAT).map_err(
            |source| ArtifactNameError::Instant {
                name: file_name.to_string(),
                source,
            },
        )?;

        Ok(Self {
            captured_at: naive.and_utc(),
        })
    }
}

/// Column-oriented content of one staged artifact.
///
/// Each price field maps row keys (the bar timestamps in epoch milliseconds,
/// rendered as strings) to values. Consumers treat the keys as opaque row
/// indices; only the values feed the per-period summary. Extra columns in a
/// staged file are tolerated and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactData {
    /// Opening prices by row.
    #[serde(rename = "Open")]
    pub open: IndexMap<String, f64>,

    /// High prices by row.
    #[serde(rename = "High")]
    pub high: IndexMap<String, f64>,

    /// Low prices by row.
    #[serde(rename = "Low")]
    pub low: IndexMap<String, f64>,

    /// Closing prices by row.
    #[serde(rename = "Close")]
    pub close: IndexMap<String, f64>,
}

impl ArtifactData {
    /// Builds the column-oriented encoding of a captured bar sequence.
    pub fn from_bars(bars: &[Bar]) -> Self {
        let mut data = ArtifactData::default();
        for bar in bars {
            let row = bar.timestamp.timestamp_millis().to_string();
            data.open.insert(row.clone(), bar.open);
            data.high.insert(row.clone(), bar.high);
            data.low.insert(row.clone(), bar.low);
            data.close.insert(row, bar.close);
        }
        data
    }

    /// Number of rows in the artifact, defined by the `Open` column.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether the artifact holds no rows.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
