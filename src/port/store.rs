//! Snapshot persistence ports.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::domain::{Cadence, ClusterId, Snapshot, TagSet};
use crate::error::Result;

/// Storage operations for cluster snapshots.
///
/// Implemented by the live RDS adapter and the file-backed simulation
/// adapter. Every operation re-reads fresh store state; callers never
/// cache snapshot lists across tiers or runs.
pub trait SnapshotStore: Send + Sync {
    /// List snapshots of `cluster` whose tag set contains `cadence`,
    /// sorted by creation time ascending.
    fn list_snapshots(
        &self,
        cluster: &ClusterId,
        cadence: Cadence,
    ) -> impl Future<Output = Result<Vec<Snapshot>>> + Send;

    /// Create one snapshot carrying all of `tags`, timestamped with the
    /// caller's `taken_at` (real or simulated "now").
    fn create_snapshot(
        &self,
        cluster: &ClusterId,
        tags: &TagSet,
        taken_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<Snapshot>> + Send;

    /// Remove `cadence` from the snapshot's tag set, deleting the
    /// snapshot once the set empties.
    ///
    /// Idempotent: removing an absent tag, or targeting a snapshot that
    /// is already gone, is a no-op. A snapshot claimed excess by several
    /// tiers in one run receives one removal per tier.
    fn remove_tag(
        &self,
        snapshot: &Snapshot,
        cadence: Cadence,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Enumeration of existing DB clusters.
pub trait ClusterDirectory: Send + Sync {
    /// List all cluster identifiers known to the backing service.
    fn list_clusters(&self) -> impl Future<Output = Result<Vec<ClusterId>>> + Send;
}
