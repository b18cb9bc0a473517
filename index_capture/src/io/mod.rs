//! Durability boundary between capture and processing.
//!
//! A capture run ends by handing its bars to a [`SnapshotSink`]; the
//! ingestion stage later discovers whatever the sink staged. Nothing here
//! aggregates or transforms; the sink exists so capture and processing can
//! run on different cadences with different failure domains.

pub mod sink;
pub mod staging;

pub use sink::{SnapshotError, SnapshotSink};
pub use staging::StagingDirSink;
