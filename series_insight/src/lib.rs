//! Analytics and presentation stage of the index summary pipeline.
//!
//! Turns the accumulated summary series into renderable insight: additive
//! trend/seasonal/residual [`decompose`](decompose::decompose)-ition and a
//! fixed-order [`Arima`](arima::Arima) projection, both packaged as chart
//! payloads by [`charts`]. The [`cache::SeriesCache`] keeps the last-loaded
//! series per session and reloads only when the store's update marker says
//! something new landed.

pub mod arima;
pub mod cache;
pub mod charts;
pub mod column;
pub mod decompose;
pub mod error;

pub use error::InsightError;
