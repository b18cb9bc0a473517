use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::bar::Bar;

/// Errors that can occur while landing a snapshot.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SnapshotError {
    /// The captured bars could not be encoded into the artifact format.
    #[snafu(display("Failed to encode snapshot: {source}"))]
    Encode {
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// A filesystem error while writing the artifact.
    #[snafu(display("I/O error: {source}"))]
    Io {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

/// Writes one captured bar sequence to a durable destination.
#[async_trait]
pub trait SnapshotSink {
    /// The type of handle returned after a successful write.
    ///
    /// A staging-directory sink returns the written `PathBuf`; other sinks
    /// may return whatever identifies the landed snapshot.
    type Output;

    /// Durably stores `bars` as one artifact.
    async fn write(&self, bars: &[Bar]) -> Result<Self::Output, SnapshotError>;
}
