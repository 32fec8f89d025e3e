//! Snapshot lifecycle orchestration.
//!
//! For each cluster the orchestrator evaluates the three cadence tiers
//! in fixed order against freshly-listed store state, merges the
//! triggered tiers into a single creation, and detags every excess
//! snapshot per claiming tier. Planning and applying are separate so a
//! dry run can log the plan without mutating the store.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{evaluate, Cadence, ClusterId, Schedule, Snapshot, TagSet};
use crate::error::Result;
use crate::port::SnapshotStore;

/// The work one run has decided to do for one cluster.
#[derive(Debug, Clone)]
pub struct ClusterPlan {
    pub cluster: ClusterId,
    /// Tiers that trigger today; non-empty means one snapshot is created
    /// carrying all of them.
    pub pending: TagSet,
    /// Per-tier excess, in tier evaluation order. The same physical
    /// snapshot may appear under several tiers; each entry is one
    /// idempotent detag.
    pub deletions: Vec<(Cadence, Snapshot)>,
}

impl ClusterPlan {
    /// Whether the plan performs no store mutation at all.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.pending.is_empty() && self.deletions.is_empty()
    }
}

/// Drives the snapshot lifecycle for a set of clusters against one
/// injected store.
pub struct Orchestrator<'a, S> {
    store: &'a S,
    schedule: Schedule,
}

impl<'a, S: SnapshotStore> Orchestrator<'a, S> {
    pub fn new(store: &'a S, schedule: Schedule) -> Self {
        Self { store, schedule }
    }

    /// Evaluate all tiers for one cluster without mutating anything.
    ///
    /// Excess is computed from the pre-create listing, so the snapshot
    /// a plan creates is never in its own excess set.
    pub async fn plan_cluster(&self, cluster: &ClusterId, now: DateTime<Utc>) -> Result<ClusterPlan> {
        info!(cluster = %cluster, "analyzing snapshot status");

        let mut pending = TagSet::empty();
        let mut deletions = Vec::new();

        for cadence in Cadence::ALL {
            // Fresh read per tier; no caching across the run.
            let snapshots = self.store.list_snapshots(cluster, cadence).await?;
            let evaluation = evaluate(now, self.schedule.rule(cadence), &snapshots);

            debug!(
                cluster = %cluster,
                %cadence,
                existing = snapshots.len(),
                triggers_today = evaluation.triggers_today,
                excess = evaluation.excess.len(),
                "evaluated tier"
            );

            if evaluation.triggers_today {
                pending.insert(cadence);
            }
            deletions.extend(
                evaluation
                    .excess
                    .into_iter()
                    .map(|snapshot| (cadence, snapshot)),
            );
        }

        Ok(ClusterPlan {
            cluster: cluster.clone(),
            pending,
            deletions,
        })
    }

    /// Execute a plan: at most one creation, then every detag.
    pub async fn apply(&self, plan: &ClusterPlan, now: DateTime<Utc>) -> Result<()> {
        if plan.pending.is_empty() {
            info!(cluster = %plan.cluster, "no snapshot needed today");
        } else {
            self.store
                .create_snapshot(&plan.cluster, &plan.pending, now)
                .await?;
        }

        for (cadence, snapshot) in &plan.deletions {
            debug!(snapshot = %snapshot.name, %cadence, "excess snapshot, removing tier tag");
            self.store.remove_tag(snapshot, *cadence).await?;
        }
        Ok(())
    }

    /// Plan and apply for every cluster in order. With `dry_run`, plans
    /// are logged but nothing is mutated.
    pub async fn run(
        &self,
        clusters: &[ClusterId],
        now: DateTime<Utc>,
        dry_run: bool,
    ) -> Result<()> {
        for cluster in clusters {
            let plan = self.plan_cluster(cluster, now).await?;
            if dry_run {
                log_plan(&plan);
                continue;
            }
            self.apply(&plan, now).await?;
        }
        Ok(())
    }
}

fn log_plan(plan: &ClusterPlan) {
    if plan.is_noop() {
        info!(cluster = %plan.cluster, "dry run: nothing to do");
        return;
    }
    if !plan.pending.is_empty() {
        info!(cluster = %plan.cluster, tags = %plan.pending, "dry run: would create snapshot");
    }
    for (cadence, snapshot) in &plan.deletions {
        info!(
            cluster = %plan.cluster,
            snapshot = %snapshot.name,
            %cadence,
            "dry run: would remove tier tag"
        );
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::testkit;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 3, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn coincident_tiers_merge_into_one_pending_set() {
        let cluster = ClusterId::new("db");
        let store = testkit::store::MemoryStore::with_clusters(&[cluster.clone()]);
        let orchestrator = Orchestrator::new(&store, testkit::config::schedule(2, 2, 7));

        // 2024-09-01 is both the 1st of the month and a Sunday.
        let plan = orchestrator
            .plan_cluster(&cluster, day(2024, 9, 1))
            .await
            .unwrap();

        assert!(!plan.pending.contains(Cadence::Yearly));
        assert!(plan.pending.contains(Cadence::Monthly));
        assert!(plan.pending.contains(Cadence::Weekly));
        assert!(plan.deletions.is_empty());
    }

    #[tokio::test]
    async fn apply_creates_one_snapshot_with_all_pending_tags() {
        let cluster = ClusterId::new("db");
        let store = testkit::store::MemoryStore::with_clusters(&[cluster.clone()]);
        let orchestrator = Orchestrator::new(&store, testkit::config::schedule(2, 2, 7));

        let now = day(2024, 9, 1);
        let plan = orchestrator.plan_cluster(&cluster, now).await.unwrap();
        orchestrator.apply(&plan, now).await.unwrap();

        let all = store.snapshots(&cluster);
        assert_eq!(all.len(), 1);
        assert!(all[0].tags.contains(Cadence::Monthly));
        assert!(all[0].tags.contains(Cadence::Weekly));
    }

    #[tokio::test]
    async fn shared_snapshot_detagged_by_both_tiers_in_one_run() {
        let cluster = ClusterId::new("db");
        let store = testkit::store::MemoryStore::with_clusters(&[cluster.clone()]);

        // One old snapshot claimed by both disabled tiers.
        store.insert(testkit::domain::snapshot(
            &cluster,
            day(2023, 1, 1),
            &[Cadence::Yearly, Cadence::Monthly],
        ));

        let orchestrator = Orchestrator::new(&store, testkit::config::schedule(0, 0, 7));
        let now = day(2024, 6, 3);
        let plan = orchestrator.plan_cluster(&cluster, now).await.unwrap();

        // Both tiers independently claim the same physical snapshot.
        assert_eq!(plan.deletions.len(), 2);
        orchestrator.apply(&plan, now).await.unwrap();
        assert!(store.snapshots(&cluster).is_empty());
    }

    #[tokio::test]
    async fn dry_run_leaves_the_store_untouched() {
        let cluster = ClusterId::new("db");
        let store = testkit::store::MemoryStore::with_clusters(&[cluster.clone()]);
        let orchestrator = Orchestrator::new(&store, testkit::config::schedule(2, 2, 7));

        orchestrator
            .run(std::slice::from_ref(&cluster), day(2024, 9, 1), true)
            .await
            .unwrap();

        assert!(store.snapshots(&cluster).is_empty());
    }
}
