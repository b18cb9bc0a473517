//! Capture run configuration.
//!
//! One TOML file describes a scheduled capture: which symbol to sample, how
//! far back, at what cadence, and where to stage the resulting artifact.
//!
//! ```toml
//! symbol = "^FCHI"
//! staging_dir = "cac40_data"
//! window = "one_day"
//! interval = "one_hour"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::capture::{CaptureParams, CaptureWindow, SampleInterval};

/// Errors raised while loading a capture configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read capture config {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The file content is not a valid capture configuration.
    #[error("failed to parse capture config: {source}")]
    Parse {
        /// Underlying TOML failure.
        source: toml::de::Error,
    },
}

fn default_symbol() -> String {
    "^FCHI".to_string()
}

/// Configuration of one scheduled capture run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaptureConfig {
    /// Index symbol to capture. Defaults to the CAC 40.
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Directory where snapshot artifacts are staged for ingestion.
    pub staging_dir: PathBuf,

    /// Bounded lookback window, defaults to one day.
    #[serde(default)]
    pub window: CaptureWindow,

    /// Sampling interval, defaults to one hour.
    #[serde(default)]
    pub interval: SampleInterval,
}

impl CaptureConfig {
    /// Parses a configuration from a TOML string.
    pub fn load_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse { source })
    }

    /// Reads and parses a configuration file from disk.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_str(&raw)
    }

    /// The provider request this configuration describes.
    pub fn capture_params(&self) -> CaptureParams {
        CaptureParams {
            symbol: self.symbol.clone(),
            window: self.window,
            interval: self.interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let cfg = CaptureConfig::load_str(r#"staging_dir = "cac40_data""#).expect("parse");
        assert_eq!(cfg.symbol, "^FCHI");
        assert_eq!(cfg.window, CaptureWindow::OneDay);
        assert_eq!(cfg.interval, SampleInterval::OneHour);
        assert_eq!(cfg.staging_dir, PathBuf::from("cac40_data"));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = CaptureConfig::load_str(
            r#"
            symbol = "^GDAXI"
            staging_dir = "/var/lib/index/staging"
            window = "five_days"
            interval = "thirty_minutes"
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.symbol, "^GDAXI");
        assert_eq!(cfg.window, CaptureWindow::FiveDays);
        assert_eq!(cfg.interval, SampleInterval::ThirtyMinutes);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = CaptureConfig::load_str(
            r#"
            staging_dir = "cac40_data"
            lookback_days = 7
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_staging_dir_is_an_error() {
        let err = CaptureConfig::load_str(r#"symbol = "^FCHI""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
