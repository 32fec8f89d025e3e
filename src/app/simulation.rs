//! Date-range simulation driver.
//!
//! Feeds synthetic "now" values into the orchestrator one day at a time
//! against the file-backed store, so date-boundary behavior (month ends,
//! leap days, year rollover) can be exercised across multi-year ranges.
//! The schedule is a per-step parameter: tests swap it mid-run to cover
//! retention changes.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::adapter::sim::FileStore;
use crate::app::orchestrator::Orchestrator;
use crate::domain::{ClusterId, Schedule};
use crate::error::Result;

/// Drives simulated daily runs against a seeded file store.
pub struct SimulationDriver {
    store: FileStore,
    clusters: Vec<ClusterId>,
}

impl SimulationDriver {
    /// Seed a fresh store file for the given clusters and wrap it in a
    /// driver.
    pub fn seed(path: impl AsRef<Path>, clusters: Vec<ClusterId>) -> Result<Self> {
        let store = FileStore::seed(path.as_ref(), &clusters)?;
        Ok(Self { store, clusters })
    }

    /// Attach to an already-seeded store file.
    pub fn new(store: FileStore, clusters: Vec<ClusterId>) -> Self {
        Self { store, clusters }
    }

    /// The underlying store, for state inspection between steps.
    #[must_use]
    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Run one simulated day.
    pub async fn step(&self, schedule: Schedule, now: DateTime<Utc>) -> Result<()> {
        debug!(date = %now.date_naive(), "simulated day");
        Orchestrator::new(&self.store, schedule)
            .run(&self.clusters, now, false)
            .await
    }

    /// Run `days + 1` consecutive daily steps starting at `start`
    /// (inclusive range, matching a "today through N days out" window).
    pub async fn run_days(&self, schedule: Schedule, start: DateTime<Utc>, days: u32) -> Result<()> {
        for offset in 0..=i64::from(days) {
            self.step(schedule, start + Duration::days(offset)).await?;
        }
        Ok(())
    }
}
