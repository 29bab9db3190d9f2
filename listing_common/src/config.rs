//! Configured constants and environment-driven email settings.
//!
//! The monitor watches exactly one symbol and mails exactly one recipient, so
//! everything that never changes at runtime lives here as a constant. Email
//! credentials come from the environment and are re-read on every send, so a
//! refreshed app password is picked up without a redeploy.

use std::env;

use crate::error::MonitorError;
use crate::result::Result;

/// The single symbol whose listing status is monitored.
pub const TICKER: &str = "FRMI";

/// Timeout applied to each market-data HTTP call, in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the sender address (also the SMTP login).
pub const ENV_EMAIL_SENDER: &str = "EMAIL_SENDER";
/// Environment variable holding the recipient address.
pub const ENV_EMAIL_RECEIVER: &str = "EMAIL_RECEIVER";
/// Environment variable holding the SMTP password (e.g., a Gmail app password).
pub const ENV_EMAIL_PASSWORD: &str = "EMAIL_PASSWORD";
/// Environment variable overriding the SMTP relay host.
pub const ENV_SMTP_SERVER: &str = "SMTP_SERVER";
/// Environment variable overriding the SMTP relay port.
pub const ENV_SMTP_PORT: &str = "SMTP_PORT";
/// Environment variable pointing the production binary at a JSON state file.
pub const ENV_STATE_FILE: &str = "STATE_FILE";

/// SMTP relay host used when `SMTP_SERVER` is not set.
pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
/// SMTP relay port used when `SMTP_PORT` is not set.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP delivery settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Sender address; doubles as the SMTP login name.
    pub sender: String,
    /// Recipient address.
    pub receiver: String,
    /// SMTP password.
    pub password: String,
    /// SMTP relay host.
    pub smtp_server: String,
    /// SMTP relay port (STARTTLS).
    pub smtp_port: u16,
}

impl EmailConfig {
    /// Resolve the email settings from the process environment.
    ///
    /// Sender, receiver, and password are required; host and port fall back to
    /// the Gmail defaults. Any missing required variable is an error, which the
    /// mailer surfaces before attempting a connection.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve the email settings through an arbitrary lookup function.
    ///
    /// `from_env` delegates here; tests pass a closure over a map instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sender = require(&lookup, ENV_EMAIL_SENDER)?;
        let receiver = require(&lookup, ENV_EMAIL_RECEIVER)?;
        let password = require(&lookup, ENV_EMAIL_PASSWORD)?;
        let smtp_server =
            lookup(ENV_SMTP_SERVER).unwrap_or_else(|| String::from(DEFAULT_SMTP_SERVER));
        let smtp_port = match lookup(ENV_SMTP_PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                MonitorError::Format(format!("Invalid {} value '{}': {}", ENV_SMTP_PORT, raw, e))
            })?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(EmailConfig {
            sender,
            receiver,
            password,
            smtp_server,
            smtp_port,
        })
    }
}

/// Look up a required variable, treating empty values as missing.
fn require<F>(lookup: &F, name: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MonitorError::MissingEnv(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars_from(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn resolves_full_configuration() {
        let vars = vars_from(&[
            (ENV_EMAIL_SENDER, "bot@example.com"),
            (ENV_EMAIL_RECEIVER, "owner@example.com"),
            (ENV_EMAIL_PASSWORD, "app-password"),
            (ENV_SMTP_SERVER, "smtp.example.com"),
            (ENV_SMTP_PORT, "2525"),
        ]);

        let config = EmailConfig::from_lookup(|name| vars.get(name).cloned()).unwrap();
        assert_eq!(config.sender, "bot@example.com");
        assert_eq!(config.receiver, "owner@example.com");
        assert_eq!(config.smtp_server, "smtp.example.com");
        assert_eq!(config.smtp_port, 2525);
    }

    #[test]
    fn falls_back_to_gmail_defaults() {
        let vars = vars_from(&[
            (ENV_EMAIL_SENDER, "bot@example.com"),
            (ENV_EMAIL_RECEIVER, "owner@example.com"),
            (ENV_EMAIL_PASSWORD, "app-password"),
        ]);

        let config = EmailConfig::from_lookup(|name| vars.get(name).cloned()).unwrap();
        assert_eq!(config.smtp_server, DEFAULT_SMTP_SERVER);
        assert_eq!(config.smtp_port, DEFAULT_SMTP_PORT);
    }

    #[test]
    fn missing_credential_short_circuits() {
        let vars = vars_from(&[
            (ENV_EMAIL_SENDER, "bot@example.com"),
            (ENV_EMAIL_RECEIVER, "owner@example.com"),
        ]);

        match EmailConfig::from_lookup(|name| vars.get(name).cloned()) {
            Err(MonitorError::MissingEnv(name)) => assert_eq!(name, ENV_EMAIL_PASSWORD),
            other => panic!("expected MissingEnv, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let vars = vars_from(&[
            (ENV_EMAIL_SENDER, "   "),
            (ENV_EMAIL_RECEIVER, "owner@example.com"),
            (ENV_EMAIL_PASSWORD, "app-password"),
        ]);

        assert!(matches!(
            EmailConfig::from_lookup(|name| vars.get(name).cloned()),
            Err(MonitorError::MissingEnv(ENV_EMAIL_SENDER))
        ));
    }

    #[test]
    fn rejects_unparsable_port() {
        let vars = vars_from(&[
            (ENV_EMAIL_SENDER, "bot@example.com"),
            (ENV_EMAIL_RECEIVER, "owner@example.com"),
            (ENV_EMAIL_PASSWORD, "app-password"),
            (ENV_SMTP_PORT, "not-a-port"),
        ]);

        assert!(matches!(
            EmailConfig::from_lookup(|name| vars.get(name).cloned()),
            Err(MonitorError::Format(_))
        ));
    }
}
