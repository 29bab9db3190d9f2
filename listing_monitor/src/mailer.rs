//! Alert send capability and its SMTP implementation.
//!
//! The orchestrator only sees the `AlertSender` trait. The production
//! implementation delivers a single-part HTML message through an
//! authenticated STARTTLS session. Email settings are resolved from the
//! environment on every send; a missing sender, receiver, or password
//! short-circuits into an error before any connection is attempted, and the
//! tick carries on. The cadence state is only advanced by the caller after
//! a successful send.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use listing_common::config::EmailConfig;
use listing_common::Result;
use log::info;

/// Capability consumed by the orchestrator to deliver an alert email.
pub trait AlertSender {
    /// Deliver one HTML message with the given subject.
    fn send(&self, subject: &str, html_body: &str) -> Result<()>;
}

impl<S: AlertSender + ?Sized> AlertSender for &S {
    fn send(&self, subject: &str, html_body: &str) -> Result<()> {
        (**self).send(subject, html_body)
    }
}

/// `AlertSender` delivering through an authenticated SMTP relay.
#[derive(Debug, Default)]
pub struct SmtpMailer;

impl SmtpMailer {
    /// Create the mailer. Settings are looked up per send, not held here.
    pub fn new() -> Self {
        SmtpMailer
    }
}

impl AlertSender for SmtpMailer {
    fn send(&self, subject: &str, html_body: &str) -> Result<()> {
        let config = EmailConfig::from_env()?;

        let email = Message::builder()
            .from(config.sender.parse()?)
            .to(config.receiver.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(String::from(html_body))?;

        let transport = SmtpTransport::starttls_relay(&config.smtp_server)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.sender.clone(),
                config.password.clone(),
            ))
            .build();

        transport.send(&email)?;
        info!("Email alert delivered: {} -> {}", config.sender, config.receiver);
        Ok(())
    }
}
