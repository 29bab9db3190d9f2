//! Subjects and HTML bodies for the two alert kinds.
//!
//! The status message recurs while the symbol is unlisted; the confirmation
//! message goes out exactly once and announces that monitoring has ended.
//! Bodies are plain `format!` templates.

use chrono::{DateTime, FixedOffset, Utc};
use listing_common::clock::format_timestamp;
use listing_common::config::TICKER;

/// Subject line for the recurring status message.
pub fn status_subject() -> String {
    format!("{} listing alert (monitoring)", TICKER)
}

/// Subject line for the one-time confirmation message.
pub fn confirmation_subject() -> String {
    format!("{} listing alert (confirmed)", TICKER)
}

/// HTML body for the recurring "still not listed" status message.
pub fn status_body(checked_at: DateTime<FixedOffset>) -> String {
    format!(
        r#"<html>
<body>
    <h2>⏰ Stock listing monitoring status</h2>
    <p><strong>{ticker}</strong> listing monitoring is in progress.</p>
    <div style="background-color: #f8f9fa; padding: 15px; border-radius: 5px; margin: 10px 0;">
        <h3>📊 Monitoring details</h3>
        <ul>
            <li><strong>Symbol:</strong> {ticker}</li>
            <li><strong>Listing status:</strong> not listed yet</li>
            <li><strong>Checked at (KST):</strong> {checked_kst}</li>
            <li><strong>Monitoring window:</strong> daily 21:30 - 06:00 (KST)</li>
            <li><strong>Notification cadence:</strong> hourly</li>
        </ul>
    </div>
    <div style="background-color: #e2e3e5; padding: 10px; border-radius: 5px; margin: 10px 0;">
        <strong>⏳ Next notification:</strong> in one hour, or as soon as the listing is confirmed
    </div>
    <p>Once the listing is confirmed you will be notified immediately and monitoring will end.</p>
    <hr>
    <small>This alert was sent automatically by the listing monitor.</small>
</body>
</html>"#,
        ticker = TICKER,
        checked_kst = format_timestamp(&checked_at),
    )
}

/// HTML body for the one-time "listing confirmed" message.
pub fn confirmation_body(confirmed_at: DateTime<FixedOffset>) -> String {
    let confirmed_utc = confirmed_at.with_timezone(&Utc);
    format!(
        r#"<html>
<body>
    <h2>🎉 Stock listing confirmed!</h2>
    <p><strong>{ticker}</strong> is now listed!</p>
    <div style="background-color: #d4edda; padding: 15px; border-radius: 5px; margin: 10px 0; border-left: 5px solid #28a745;">
        <h3>✅ Listing details</h3>
        <ul>
            <li><strong>Symbol:</strong> {ticker}</li>
            <li><strong>Listing status:</strong> active</li>
            <li><strong>Confirmed at (KST):</strong> {confirmed_kst}</li>
            <li><strong>Confirmed at (UTC):</strong> {confirmed_utc}</li>
            <li><strong>Data source:</strong> Yahoo Finance</li>
        </ul>
    </div>
    <div style="background-color: #fff3cd; padding: 10px; border-radius: 5px; margin: 10px 0;">
        <strong>📢 Monitoring ended:</strong> the listing is confirmed, so monitoring stops automatically.
    </div>
    <p>Quote data for the symbol was observed on Yahoo Finance.</p>
    <hr>
    <small>This alert was sent automatically by the listing monitor.</small>
</body>
</html>"#,
        ticker = TICKER,
        confirmed_kst = format_timestamp(&confirmed_at),
        confirmed_utc = format_timestamp(&confirmed_utc),
    )
}
