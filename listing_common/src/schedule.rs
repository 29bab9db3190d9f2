//! Monitoring window gate and notification cadence rule.
//!
//! Two pure decisions drive every tick:
//!
//! - `is_monitoring_time` — whether the current KST time falls inside the
//!   daily window (21:30 through 05:59:59 the next morning, boundaries
//!   inclusive). The check compares minutes since midnight against the two
//!   boundaries, so the window survives a future boundary change without the
//!   half-hour clause silently misbehaving at other hours.
//! - `should_notify` — whether enough time has passed since the previous
//!   status notification. At most one non-confirmation email goes out per
//!   rolling hour; the elapsed check is inclusive at exactly one hour.
//!
//! Callers record the notification time only after a send succeeds, so a
//! failed send is retried on the very next tick.

use chrono::{DateTime, FixedOffset, Timelike};

/// Minute of day at which the evening window opens (21:30 KST).
pub const WINDOW_OPENS_MINUTE: u32 = 21 * 60 + 30;

/// First minute of day outside the overnight window (06:00 KST).
pub const WINDOW_CLOSES_MINUTE: u32 = 6 * 60;

/// Minimum spacing between two status notifications, in seconds.
pub const NOTIFICATION_INTERVAL_SECS: i64 = 3600;

/// Returns `true` when `now` falls inside the daily monitoring window.
pub fn is_monitoring_time(now: DateTime<FixedOffset>) -> bool {
    let minute_of_day = now.hour() * 60 + now.minute();
    minute_of_day >= WINDOW_OPENS_MINUTE || minute_of_day < WINDOW_CLOSES_MINUTE
}

/// Returns `true` when a status notification is due at `now`.
///
/// Always `true` when no notification has been sent yet; otherwise `true`
/// once at least [`NOTIFICATION_INTERVAL_SECS`] have elapsed since `last`.
pub fn should_notify(last: Option<DateTime<FixedOffset>>, now: DateTime<FixedOffset>) -> bool {
    match last {
        None => true,
        Some(last) => {
            now.signed_duration_since(last).num_seconds() >= NOTIFICATION_INTERVAL_SECS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::kst;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<FixedOffset> {
        kst()
            .with_ymd_and_hms(2025, 6, 2, hour, minute, second)
            .unwrap()
    }

    #[test]
    fn early_morning_hours_are_inside_the_window() {
        for hour in 0..6 {
            assert!(is_monitoring_time(at(hour, 0, 0)), "hour {}", hour);
            assert!(is_monitoring_time(at(hour, 59, 59)), "hour {}", hour);
        }
    }

    #[test]
    fn daytime_hours_are_outside_the_window() {
        for hour in 6..21 {
            assert!(!is_monitoring_time(at(hour, 0, 0)), "hour {}", hour);
            assert!(!is_monitoring_time(at(hour, 59, 59)), "hour {}", hour);
        }
    }

    #[test]
    fn hour_21_splits_at_half_past() {
        assert!(!is_monitoring_time(at(21, 0, 0)));
        assert!(!is_monitoring_time(at(21, 29, 59)));
        assert!(is_monitoring_time(at(21, 30, 0)));
        assert!(is_monitoring_time(at(21, 59, 59)));
    }

    #[test]
    fn late_evening_hours_are_inside_the_window() {
        for hour in 22..24 {
            assert!(is_monitoring_time(at(hour, 0, 0)), "hour {}", hour);
            assert!(is_monitoring_time(at(hour, 59, 59)), "hour {}", hour);
        }
    }

    #[test]
    fn six_sharp_is_outside_the_window() {
        assert!(is_monitoring_time(at(5, 59, 59)));
        assert!(!is_monitoring_time(at(6, 0, 0)));
    }

    #[test]
    fn first_notification_is_always_due() {
        assert!(should_notify(None, at(3, 15, 0)));
        assert!(should_notify(None, at(12, 0, 0)));
    }

    #[test]
    fn one_hour_boundary_is_inclusive() {
        let last = at(21, 30, 0);
        assert!(!should_notify(Some(last), last + Duration::seconds(3599)));
        assert!(should_notify(Some(last), last + Duration::seconds(3600)));
        assert!(should_notify(Some(last), last + Duration::seconds(7200)));
    }

    #[test]
    fn fifteen_minutes_is_too_soon() {
        let last = at(21, 30, 0);
        assert!(!should_notify(Some(last), at(21, 45, 0)));
    }
}
