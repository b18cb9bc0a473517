//! Capture stage of the index summary pipeline.
//!
//! This crate owns everything between the market-data provider and the
//! staging area: the canonical [`Bar`](models::bar::Bar) model, the
//! [`BarSource`](providers::BarSource) provider abstraction with its Yahoo
//! chart implementation, the staged-artifact naming and content codec, and
//! the [`SnapshotSink`](io::SnapshotSink) that lands one capture as a
//! durable artifact for the ingestion stage to pick up later.

pub mod config;
pub mod io;
pub mod models;
pub mod providers;
