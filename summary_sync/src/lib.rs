//! Ingestion and store stage of the index summary pipeline.
//!
//! An independent, scheduled process drives one [`ingest`] pass at a time:
//! it discovers staged snapshot artifacts, reduces each to a per-capture
//! summary, persists it through the [`store`] gateway, removes the artifact,
//! and finally advances the store's update marker. Readers come in through
//! [`series`] (full ordered reload) and [`staleness`] (cheap "did anything
//! change since my last fetch" check).

#![deny(missing_docs)]

pub mod db;
pub mod ingest;
pub mod models;
#[allow(missing_docs)]
pub mod schema;
pub mod series;
pub mod staleness;
pub mod store;
pub mod summarize;
pub mod time;
