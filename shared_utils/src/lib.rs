//! Small helpers shared by the pipeline binaries.

pub mod env;
