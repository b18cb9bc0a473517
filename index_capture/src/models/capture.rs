//! Parameters for one capture invocation.
//!
//! Window and interval are provider-bounded constants: every scheduled run
//! requests the same bounded recent window at the same sampling cadence, with
//! no relation to prior calls.

use serde::{Deserialize, Serialize};

/// The bounded lookback window of a capture request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CaptureWindow {
    /// The most recent trading day.
    #[default]
    OneDay,
    /// The most recent five trading days.
    FiveDays,
}

impl CaptureWindow {
    /// The provider query value for this window.
    pub fn as_query(&self) -> &'static str {
        match self {
            CaptureWindow::OneDay => "1d",
            CaptureWindow::FiveDays => "5d",
        }
    }
}

/// The sampling interval of the bars inside the capture window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SampleInterval {
    /// One bar per hour.
    #[default]
    OneHour,
    /// One bar per thirty minutes.
    ThirtyMinutes,
}

impl SampleInterval {
    /// The provider query value for this interval.
    pub fn as_query(&self) -> &'static str {
        match self {
            SampleInterval::OneHour => "1h",
            SampleInterval::ThirtyMinutes => "30m",
        }
    }
}

/// Universal parameters for requesting a bar capture from a data provider.
///
/// Validation of allowed window/interval combinations is performed by each
/// provider implementation according to its own API rules.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaptureParams {
    /// The index symbol to capture (e.g. `^FCHI`).
    pub symbol: String,

    /// Bounded recent lookback window.
    pub window: CaptureWindow,

    /// Sampling interval within the window.
    pub interval: SampleInterval,
}
