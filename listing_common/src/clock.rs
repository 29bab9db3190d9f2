//! KST wall-clock helpers.
//!
//! All monitoring decisions are evaluated in Korea Standard Time. KST is a
//! fixed UTC+9 offset with no daylight-saving transitions, so a
//! `FixedOffset` is sufficient and no timezone database is pulled in.

use chrono::{DateTime, FixedOffset, Utc};

/// KST offset from UTC, in hours.
pub const KST_UTC_OFFSET_HOURS: i32 = 9;

/// The KST timezone as a fixed offset.
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_UTC_OFFSET_HOURS * 3600).expect("KST offset is within range")
}

/// Current wall-clock time in KST.
pub fn kst_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&kst())
}

/// Format a timestamp the way it appears in logs and email bodies.
pub fn format_timestamp<Tz: chrono::TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn kst_is_nine_hours_ahead_of_utc() {
        let noon_utc = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let in_kst = noon_utc.with_timezone(&kst());
        assert_eq!(in_kst.hour(), 21);
    }

    #[test]
    fn formats_without_offset_suffix() {
        let time = kst().with_ymd_and_hms(2025, 3, 1, 21, 30, 5).unwrap();
        assert_eq!(format_timestamp(&time), "2025-03-01 21:30:05");
    }
}
