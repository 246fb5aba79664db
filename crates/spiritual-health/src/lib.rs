//! Spiritual health self-assessment: question catalog, scoring core, and the
//! response administration built on top of it.

pub mod assessment;
pub mod config;
pub mod error;
pub mod responses;
pub mod telemetry;
