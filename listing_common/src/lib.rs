//!
//! Common types and utilities shared by the listing monitor and the local runner.
//!
//! This crate aggregates:
//! - `error` — unified error type `MonitorError` used across the workspace.
//! - `result` — handy `Result<T, MonitorError>` alias.
//! - `config` — monitored symbol and environment-driven email settings.
//! - `clock` — KST wall-clock helpers and formatting.
//! - `schedule` — the monitoring window gate and notification cadence rule.
//! - `snapshot` — the listing snapshot returned by market-data fetches.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod config;
pub mod clock;
pub mod schedule;
pub mod snapshot;

pub use error::MonitorError;
pub use result::Result;
pub use snapshot::ListingSnapshot;
