//! Provider abstraction for index price sources.
//!
//! This module defines the [`BarSource`] trait, a unified interface for
//! capturing a bounded recent window of OHLC bars from any market-data vendor.
//!
//! Each concrete provider implementation (such as the Yahoo chart API) handles
//! vendor-specific request construction and payload validation. The trait is
//! designed for async usage and supports dynamic dispatch (`dyn BarSource`)
//! for runtime selection of providers.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use index_capture::models::{bar::Bar, capture::CaptureParams};
//! use index_capture::providers::{BarSource, SourceError};
//!
//! struct MySource;
//!
//! #[async_trait]
//! impl BarSource for MySource {
//!     async fn fetch_bars(&self, _params: &CaptureParams) -> Result<Vec<Bar>, SourceError> {
//!         Ok(vec![])
//!     }
//! }
//! ```

pub mod yahoo_chart;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{bar::Bar, capture::CaptureParams};

/// Trait for capturing a window of OHLC bars from a market-data provider.
///
/// Implementations surface any condition that leaves the caller without a
/// usable bar series as a [`SourceError`]; the scheduled capture run treats
/// that as retryable on its next invocation, never as fatal.
#[async_trait]
pub trait BarSource {
    /// Captures the bar series described by `params`.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Bar>)` - the sampled bars, in provider order, never empty.
    /// * `Err(SourceError)` - the source could not deliver a usable capture.
    async fn fetch_bars(&self, params: &CaptureParams) -> Result<Vec<Bar>, SourceError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init the reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },
}

/// Errors that make the source unavailable for the current capture run.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SourceError {
    /// An error during the API request (e.g., network failure, timeout).
    #[snafu(display("Chart request failed: {source}"))]
    Request {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API answered with an error payload or status.
    #[snafu(display("Chart API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// The provider answered successfully but without usable bars.
    #[snafu(display("Empty capture: {message}"))]
    EmptyCapture {
        message: String,
        backtrace: Backtrace,
    },
}
