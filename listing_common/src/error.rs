//! Error types shared between the monitor and the local runner.
//!
//! The `MonitorError` enum unifies common failure cases for configuration,
//! market-data fetches, email delivery, and file I/O, allowing crates to
//! propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the monitor and the local runner.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// I/O error originating from the standard library (state file, log file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    /// HTTP transport failure while fetching market data (connect, timeout).
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// SMTP transport failure (connection, STARTTLS, authentication, delivery).
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Failure while assembling an email message.
    #[error("Email build error: {0}")]
    Email(#[from] lettre::error::Error),

    /// A configured sender/receiver address could not be parsed as a mailbox.
    #[error("Email address error: {0}")]
    Address(#[from] lettre::address::AddressError),
}
