//! Per-tick orchestration of the listing watch.
//!
//! `Monitor` composes the building blocks into the decision an external
//! trigger asks for on every tick:
//!
//! - the window gate (`listing_common::schedule::is_monitoring_time`)
//!   decides whether checks are permitted at all right now;
//! - the injected `ListingFetcher` produces the current snapshot;
//! - a live price routes to the one-time confirmation email and, on
//!   delivery, the terminal `STOPPED` phase;
//! - an unlisted symbol routes through the notification cadence
//!   (`should_notify`) to the recurring status email.
//!
//! State handling:
//! - `last_notification` is recorded only after a status email was actually
//!   delivered; a failed send leaves it untouched so the next tick retries.
//! - the `STOPPED` transition happens only after the confirmation email was
//!   delivered; a failed confirmation send keeps the monitor running.
//! - once `STOPPED`, every later tick returns immediately: no fetch, no
//!   send, no state mutation.
//!
//! Failure handling: a fetch error ends the tick without assuming "not
//! listed". Nothing is sent and nothing is mutated, so both the window gate
//! and the cadence timer see the next tick exactly as they saw this one.
//! Every error is logged with the symbol and timestamp and stops at the tick
//! boundary; nothing propagates to the trigger host.

use chrono::{DateTime, FixedOffset, Utc};
use listing_common::clock::{format_timestamp, kst_now};
use listing_common::config::TICKER;
use listing_common::schedule;
use log::{error, info};
use strum_macros::Display;

use crate::fetch::ListingFetcher;
use crate::mailer::AlertSender;
use crate::message;
use crate::model::state::{MonitorPhase, MonitoringState};

/// What a single tick did, for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TickOutcome {
    /// The monitor is already stopped; nothing was checked.
    AlreadyStopped,
    /// Current time is outside the monitoring window; nothing was fetched.
    OutsideWindow,
    /// The listing lookup failed; nothing was sent or mutated.
    FetchFailed,
    /// Confirmation email delivered; the monitor is now stopped for good.
    ListingConfirmed,
    /// The listing was detected but the confirmation email failed to send.
    ConfirmationSendFailed,
    /// Status email delivered and the cadence timer restarted.
    StatusSent,
    /// Not listed, but the previous notification is less than an hour old.
    Throttled,
    /// Status email was due but failed to send; cadence left stale.
    StatusSendFailed,
}

/// Tick orchestrator owning the monitoring state and the two capabilities.
pub struct Monitor<F, S> {
    fetcher: F,
    sender: S,
    state: MonitoringState,
}

impl<F: ListingFetcher, S: AlertSender> Monitor<F, S> {
    /// Monitor with fresh state.
    pub fn new(fetcher: F, sender: S) -> Self {
        Self::with_state(fetcher, sender, MonitoringState::new())
    }

    /// Monitor resuming from previously persisted state.
    pub fn with_state(fetcher: F, sender: S, state: MonitoringState) -> Self {
        Monitor {
            fetcher,
            sender,
            state,
        }
    }

    /// Current monitoring state.
    pub fn state(&self) -> &MonitoringState {
        &self.state
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> MonitorPhase {
        self.state.phase()
    }

    /// Run one tick against the wall clock.
    ///
    /// This is the entry point a trigger host invokes. Ticks must not
    /// overlap; `&mut self` enforces exclusive access to the state.
    pub fn on_tick(&mut self) -> TickOutcome {
        self.tick_at(kst_now())
    }

    /// Run one tick as of the given KST time.
    pub fn tick_at(&mut self, now: DateTime<FixedOffset>) -> TickOutcome {
        if self.state.phase() == MonitorPhase::Stopped {
            info!("Monitoring is disabled; nothing to do.");
            return TickOutcome::AlreadyStopped;
        }

        info!(
            "Checking {} listing status at {} (KST: {})",
            TICKER,
            now.with_timezone(&Utc).to_rfc3339(),
            format_timestamp(&now)
        );

        if !schedule::is_monitoring_time(now) {
            info!("Outside the monitoring window (21:30 - 06:00 KST); skipping check.");
            return TickOutcome::OutsideWindow;
        }

        let snapshot = match self.fetcher.fetch(TICKER) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(
                    "Listing lookup for {} failed at {}: {}",
                    TICKER,
                    format_timestamp(&now),
                    e
                );
                return TickOutcome::FetchFailed;
            }
        };

        let live = snapshot
            .as_ref()
            .and_then(|s| s.price.map(|p| (p, s.currency.clone())));
        match live {
            Some((price, currency)) => self.confirm(now, price, &currency),
            None => self.report_status(now),
        }
    }

    fn confirm(&mut self, now: DateTime<FixedOffset>, price: f64, currency: &str) -> TickOutcome {
        info!(
            "{} is listed! Price: {} {}. Sending immediate alert and stopping monitoring...",
            TICKER, price, currency
        );

        match self
            .sender
            .send(&message::confirmation_subject(), &message::confirmation_body(now))
        {
            Ok(()) => {
                self.state.confirm_listing();
                info!("Listing confirmed; monitoring is finished for good.");
                TickOutcome::ListingConfirmed
            }
            Err(e) => {
                error!("Confirmation email failed, will retry next tick: {}", e);
                TickOutcome::ConfirmationSendFailed
            }
        }
    }

    fn report_status(&mut self, now: DateTime<FixedOffset>) -> TickOutcome {
        info!("{} not listed yet.", TICKER);

        if !schedule::should_notify(self.state.last_notification, now) {
            info!("Less than an hour since the last notification; no email this tick.");
            return TickOutcome::Throttled;
        }

        match self
            .sender
            .send(&message::status_subject(), &message::status_body(now))
        {
            Ok(()) => {
                self.state.record_notification(now);
                info!("Monitoring status email delivered.");
                TickOutcome::StatusSent
            }
            Err(e) => {
                error!("Monitoring status email failed, will retry next tick: {}", e);
                TickOutcome::StatusSendFailed
            }
        }
    }
}
