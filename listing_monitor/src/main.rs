//! Production tick entry for the listing monitor.
//!
//! An external scheduler (cron, a systemd timer, a serverless timer host)
//! invokes this binary on its own cadence, typically every five minutes.
//! Each invocation performs exactly one tick: gate on the KST monitoring
//! window, fetch the listing snapshot, and send the status or confirmation
//! email when due. There are no CLI flags; everything is driven by the
//! environment (see `listing_common::config`).
//!
//! The process always exits 0: every error is logged and swallowed at the
//! tick boundary so a transient failure never turns into a failed unit in
//! the trigger infrastructure.
//!
//! When `STATE_FILE` points at a writable path, the monitoring state is
//! loaded before the tick and saved after it, which keeps the hourly
//! notification cadence and the send-once confirmation guarantee intact
//! across process-per-tick deployments. Without it the state lives only as
//! long as the process, matching the in-memory behavior of a resident host.
#![warn(missing_docs)]
use std::env;

use listing_monitor::fetch::YahooChartFetcher;
use listing_monitor::mailer::SmtpMailer;
use listing_monitor::model::store::StateStore;
use listing_monitor::{Monitor, MonitoringState};
use listing_common::config::ENV_STATE_FILE;
use listing_common::Result;
use log::{error, info};

fn main() {
    dotenv::dotenv().ok();
    init_logger();

    // Errors are logged, never propagated; the exit code stays 0.
    if let Err(e) = run_tick() {
        error!("Tick aborted: {}", e);
    }
}

fn run_tick() -> Result<()> {
    let store = env::var(ENV_STATE_FILE).ok().map(StateStore::new);

    let state = match &store {
        Some(store) => store.load()?,
        None => MonitoringState::new(),
    };

    let fetcher = YahooChartFetcher::new()?;
    let mut monitor = Monitor::with_state(fetcher, SmtpMailer::new(), state);

    let outcome = monitor.on_tick();
    info!("Tick finished: {}", outcome);

    if let Some(store) = &store {
        store.save(monitor.state())?;
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
