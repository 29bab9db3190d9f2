//! JSON file persistence for the monitoring state.
//!
//! The monitor keeps its state in memory; under a trigger host that recycles
//! the process between ticks (cron, systemd timers, serverless schedulers)
//! that would silently reset the 1-hour cadence and the send-once guarantee.
//! Pointing the binary at a state file closes that gap: the state is loaded
//! before the tick and written back after it. A missing file yields the
//! default state; an unreadable or corrupt file is an error, not a silent
//! reset.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use listing_common::Result;
use log::debug;

use crate::model::state::MonitoringState;

/// Loads and saves `MonitoringState` as a small JSON record.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StateStore { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state, or the default state when no file exists yet.
    pub fn load(&self) -> Result<MonitoringState> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let state = serde_json::from_str(&raw)?;
                debug!("Loaded monitoring state from {}", self.path.display());
                Ok(state)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "No state file at {}; starting from defaults",
                    self.path.display()
                );
                Ok(MonitoringState::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write the state back to the backing file.
    pub fn save(&self, state: &MonitoringState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;
        debug!("Saved monitoring state to {}", self.path.display());
        Ok(())
    }
}
