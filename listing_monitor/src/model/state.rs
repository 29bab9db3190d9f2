//! Monitoring lifecycle state.
//!
//! The state starts in the monitoring phase and reaches the terminal stopped
//! phase exactly once, when the listing confirmation email has been delivered.
//! Invariant: once `listing_confirmed` is set, `active` is permanently false
//! and every later tick is a no-op; there is no un-confirm path.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Lifecycle phase derived from the state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MonitorPhase {
    /// Checks and notifications are still running.
    #[strum(serialize = "MONITORING")]
    Monitoring,
    /// Listing confirmed; the monitor is permanently done.
    #[strum(serialize = "STOPPED")]
    Stopped,
}

/// Mutable monitoring state owned by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringState {
    /// Whether the monitor still performs checks.
    pub active: bool,
    /// Whether the listing confirmation has been delivered.
    pub listing_confirmed: bool,
    /// When the last status notification went out, if any.
    pub last_notification: Option<DateTime<FixedOffset>>,
}

impl Default for MonitoringState {
    fn default() -> Self {
        MonitoringState {
            active: true,
            listing_confirmed: false,
            last_notification: None,
        }
    }
}

impl MonitoringState {
    /// Fresh state in the monitoring phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> MonitorPhase {
        if self.active && !self.listing_confirmed {
            MonitorPhase::Monitoring
        } else {
            MonitorPhase::Stopped
        }
    }

    /// Enter the terminal phase after a delivered confirmation email.
    pub fn confirm_listing(&mut self) {
        self.active = false;
        self.listing_confirmed = true;
    }

    /// Record the delivery time of a status notification.
    pub fn record_notification(&mut self, at: DateTime<FixedOffset>) {
        self.last_notification = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use listing_common::clock::kst;

    #[test]
    fn starts_in_monitoring_phase() {
        let state = MonitoringState::new();
        assert_eq!(state.phase(), MonitorPhase::Monitoring);
        assert!(state.active);
        assert!(!state.listing_confirmed);
        assert!(state.last_notification.is_none());
    }

    #[test]
    fn confirmation_is_terminal() {
        let mut state = MonitoringState::new();
        state.confirm_listing();
        assert_eq!(state.phase(), MonitorPhase::Stopped);
        assert!(!state.active);
        assert!(state.listing_confirmed);

        // A second confirmation changes nothing.
        state.confirm_listing();
        assert_eq!(state.phase(), MonitorPhase::Stopped);
    }

    #[test]
    fn notification_time_round_trips_through_json() {
        let mut state = MonitoringState::new();
        let at = kst().with_ymd_and_hms(2025, 6, 2, 21, 30, 0).unwrap();
        state.record_notification(at);

        let json = serde_json::to_string(&state).unwrap();
        let back: MonitoringState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert_eq!(back.last_notification, Some(at));
    }

    #[test]
    fn phase_prints_like_a_state_machine_label() {
        assert_eq!(MonitorPhase::Monitoring.to_string(), "MONITORING");
        assert_eq!(MonitorPhase::Stopped.to_string(), "STOPPED");
    }
}
