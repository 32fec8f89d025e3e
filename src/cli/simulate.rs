//! Handler for the `simulate` command.
//!
//! Seeds a file-backed store, drives the orchestrator across a range of
//! synthetic days, and prints the surviving snapshots. The store file
//! is left in place for inspection.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime, Utc};
use clap::Args;
use tabled::{Table, Tabled};
use tracing::info;

use crate::app::SimulationDriver;
use crate::config::{ClusterSelector, Config};
use crate::error::{ConfigError, Result};

/// Arguments for `snapwarden simulate`.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = "snapwarden.toml")]
    pub config: PathBuf,

    /// Path of the simulation store file (created, then left in place)
    #[arg(long, default_value = "snapstore.json")]
    pub store: PathBuf,

    /// First simulated date (ISO format), defaults to today
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Number of days to simulate beyond the start date
    #[arg(long, default_value_t = 730)]
    pub days: u32,
}

#[derive(Tabled)]
struct SnapshotRow {
    #[tabled(rename = "cluster")]
    cluster: String,
    #[tabled(rename = "snapshot")]
    snapshot: String,
    #[tabled(rename = "created")]
    created: String,
    #[tabled(rename = "tags")]
    tags: String,
}

/// Execute the simulate command.
pub async fn execute(args: &SimulateArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    config.init_logging();

    let clusters = match config.cluster_selector()? {
        ClusterSelector::Named(clusters) => clusters,
        ClusterSelector::All => {
            return Err(ConfigError::InvalidValue {
                field: "clusters",
                reason: "simulation requires an explicit cluster list, not ALL".into(),
            }
            .into());
        }
    };
    let schedule = config.build_schedule()?;

    let start = args
        .start
        .unwrap_or_else(|| Utc::now().date_naive())
        .and_time(NaiveTime::MIN)
        .and_utc();
    info!(
        start = %start.date_naive(),
        days = args.days,
        store = %args.store.display(),
        "simulating date range"
    );

    let driver = SimulationDriver::seed(&args.store, clusters)?;
    driver.run_days(schedule, start, args.days).await?;

    let survivors = driver.store().all_snapshots()?;
    let rows: Vec<SnapshotRow> = survivors
        .iter()
        .map(|s| SnapshotRow {
            cluster: s.cluster.to_string(),
            snapshot: s.name.clone(),
            created: s.created_at.date_naive().to_string(),
            tags: s.tags.to_tag_value(),
        })
        .collect();
    println!("{}", Table::new(rows));

    Ok(())
}
