//! Listing monitor core.
//!
//! This library wires together the building blocks behind a single timer
//! tick of the FRMI listing watch:
//!
//! - `model` — the process-wide `MonitoringState` (active flag, confirmed
//!   flag, last notification time) plus optional JSON persistence for
//!   process-per-tick deployments.
//! - `fetch` — the `ListingFetcher` capability and its Yahoo Finance chart
//!   implementation.
//! - `mailer` — the `AlertSender` capability and its SMTP implementation.
//! - `message` — subjects and HTML bodies for the two alert kinds.
//! - `tick` — the orchestrator composing window gate, fetch, cadence, and
//!   send into one `on_tick` decision.
//!
//! The orchestrator is generic over the two capabilities, so tests drive it
//! with scripted stand-ins and never touch the network.
#![warn(missing_docs)]
pub mod model;
pub mod fetch;
pub mod mailer;
pub mod message;
pub mod tick;

pub use model::state::{MonitorPhase, MonitoringState};
pub use tick::{Monitor, TickOutcome};
