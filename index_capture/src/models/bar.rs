//! Canonical in-memory representation of one sampled price observation.
//!
//! This struct is the standard output of every [`BarSource`](crate::providers::BarSource)
//! implementation and the input to the snapshot writer.

use chrono::{DateTime, Utc};

/// A single OHLC bar for a given sampling instant.
///
/// Vendor-agnostic; immutable once produced by a capture.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// The sampling instant for this bar (UTC).
    pub timestamp: DateTime<Utc>,

    /// Opening price.
    pub open: f64,

    /// Highest price during the bar interval.
    pub high: f64,

    /// Lowest price during the bar interval.
    pub low: f64,

    /// Closing price.
    pub close: f64,
}
