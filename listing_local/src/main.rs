//! Local monitoring runner: a developer-facing loop around the listing
//! monitor. It performs the same tick the production binary performs, but
//! keeps the process resident and repeats the tick on an interval (default
//! 300 seconds), so the whole overnight window can be watched from a shell.
//!
//! Usage example (CLI):
//! ```bash
//! listing_local --interval-secs 300 --log-file listing_monitor.log
//! ```
//!
//! Behavior:
//! - logs go to stderr and are mirrored into a plain-text log file;
//! - Ctrl+C requests shutdown; the sleep loop polls the flag once per second
//!   so the runner exits promptly;
//! - `--state-file` persists the monitoring state between runs, matching the
//!   production binary's `STATE_FILE`;
//! - the loop ends on its own once the listing is confirmed, since every
//!   further tick would be a no-op.
#![warn(missing_docs)]
mod args;
mod logfile;

use crate::args::Args;
use crate::logfile::TeeWriter;
use clap::Parser;
use listing_common::clock::{format_timestamp, kst_now};
use listing_common::config::TICKER;
use listing_common::{MonitorError, Result};
use listing_monitor::fetch::YahooChartFetcher;
use listing_monitor::mailer::SmtpMailer;
use listing_monitor::model::store::StateStore;
use listing_monitor::{Monitor, MonitorPhase, MonitoringState};
use log::{error, info};
use std::fs::OpenOptions;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::{Duration, Instant};

fn main() -> Result<(), MonitorError> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logger(&args.log_file)?;

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down the runner...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .expect("Error setting Ctrl+C handler");
    }

    info!("{} listing monitoring runner starting", TICKER);
    info!("Current time (KST): {}", format_timestamp(&kst_now()));
    info!("Monitoring window: daily 21:30 - 06:00 (KST)");
    info!("Notification cadence: hourly while not listed");
    info!("On confirmation: immediate alert, then monitoring ends");
    if !args.once {
        info!(
            "Tick interval: {} seconds. Press Ctrl+C to exit.",
            args.interval_secs
        );
    }

    let store = args.state_file.as_deref().map(StateStore::new);
    let state = match &store {
        Some(store) => store.load()?,
        None => MonitoringState::new(),
    };

    let fetcher = YahooChartFetcher::new()?;
    let mut monitor = Monitor::with_state(fetcher, SmtpMailer::new(), state);

    loop {
        let outcome = monitor.on_tick();
        info!("Tick finished: {}", outcome);

        if let Some(store) = &store {
            if let Err(e) = store.save(monitor.state()) {
                error!("Failed to save monitoring state: {}", e);
            }
        }

        if monitor.phase() == MonitorPhase::Stopped {
            info!("Listing confirmed; the runner has nothing left to watch.");
            break;
        }
        if args.once {
            break;
        }
        if !sleep_until_next_tick(args.interval_secs, &shutdown) {
            info!("Runner loop stopping...");
            break;
        }
    }
    Ok(())
}

/// Sleep until the next tick is due, polling the shutdown flag once per
/// second. Returns `false` when shutdown was requested during the wait.
fn sleep_until_next_tick(interval_secs: u64, shutdown: &AtomicBool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(interval_secs);
    while Instant::now() < deadline {
        if shutdown.load(Ordering::Relaxed) {
            return false;
        }
        thread::sleep(Duration::from_secs(1));
    }
    !shutdown.load(Ordering::Relaxed)
}

fn init_logger(log_file: &str) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Pipe(Box::new(TeeWriter::new(file))))
        .init();
    Ok(())
}
