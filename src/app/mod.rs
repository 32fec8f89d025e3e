//! Application wiring: config in, store selected, clusters verified,
//! orchestrator run.

pub mod orchestrator;
pub mod simulation;
pub mod verifier;

pub use orchestrator::{ClusterPlan, Orchestrator};
pub use simulation::SimulationDriver;

#[cfg(feature = "rds")]
use chrono::Utc;
#[cfg(feature = "rds")]
use tracing::info;

#[cfg(feature = "rds")]
use crate::adapter::rds::{RdsStore, RdsStoreConfig};
#[cfg(feature = "rds")]
use crate::config::Config;
#[cfg(feature = "rds")]
use crate::error::Result;

/// Top-level application entry for live runs.
pub struct App;

#[cfg(feature = "rds")]
impl App {
    /// One batch invocation against the live RDS store.
    pub async fn run(config: &Config, dry_run: bool) -> Result<()> {
        let selector = config.cluster_selector()?;
        let schedule = config.build_schedule()?;

        let store = RdsStore::connect(RdsStoreConfig {
            region: config.aws.region.clone(),
            endpoint_url: config.aws.endpoint_url.clone(),
        })
        .await;

        let clusters = verifier::resolve_clusters(&store, &selector).await?;
        info!(
            clusters = clusters.len(),
            yearly = config.retention.yearly,
            monthly = config.retention.monthly,
            weekly = config.retention.weekly,
            "starting snapshot run"
        );

        Orchestrator::new(&store, schedule)
            .run(&clusters, Utc::now(), dry_run)
            .await
    }
}
