//! Wire shape of the Yahoo v8 chart endpoint.
//!
//! The payload carries one result per requested symbol with a timestamp array
//! and parallel, nullable OHLC arrays. Fields the capture does not consume
//! (volume, adjusted close, most of `meta`) are left out; serde ignores them.

use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Deserialize, Debug)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Deserialize, Debug)]
pub struct ChartResult {
    /// Bar instants as epoch seconds, UTC. Absent when the market never traded
    /// in the requested window.
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    pub quote: Vec<Quote>,
}

/// Parallel price arrays; a `null` entry marks a sampling slot without a trade.
#[derive(Deserialize, Debug)]
pub struct Quote {
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
}
