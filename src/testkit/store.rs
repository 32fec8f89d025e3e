//! In-memory snapshot store for tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::domain::{Cadence, ClusterId, Snapshot, TagSet};
use crate::error::{Result, StoreError};
use crate::port::{ClusterDirectory, SnapshotStore};

/// In-memory store with the same semantics as the file-backed store,
/// minus the file. State is inspectable synchronously from tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    clusters: Mutex<BTreeMap<ClusterId, Vec<Snapshot>>>,
}

impl MemoryStore {
    /// Create a store with an empty snapshot list per cluster.
    pub fn with_clusters(clusters: &[ClusterId]) -> Self {
        Self {
            clusters: Mutex::new(clusters.iter().map(|c| (c.clone(), Vec::new())).collect()),
        }
    }

    /// Insert a pre-built snapshot directly, bypassing the port.
    pub fn insert(&self, snapshot: Snapshot) {
        self.clusters
            .lock()
            .unwrap()
            .entry(snapshot.cluster.clone())
            .or_default()
            .push(snapshot);
    }

    /// All snapshots currently stored for a cluster, in store order.
    pub fn snapshots(&self, cluster: &ClusterId) -> Vec<Snapshot> {
        self.clusters
            .lock()
            .unwrap()
            .get(cluster)
            .cloned()
            .unwrap_or_default()
    }
}

impl SnapshotStore for MemoryStore {
    async fn list_snapshots(&self, cluster: &ClusterId, cadence: Cadence) -> Result<Vec<Snapshot>> {
        let clusters = self.clusters.lock().unwrap();
        let records = clusters.get(cluster).ok_or_else(|| StoreError::UnknownCluster {
            cluster: cluster.to_string(),
        })?;

        let mut snapshots: Vec<Snapshot> = records
            .iter()
            .filter(|s| s.tags.contains(cadence))
            .cloned()
            .collect();
        snapshots.sort_by_key(|s| s.created_at);
        Ok(snapshots)
    }

    async fn create_snapshot(
        &self,
        cluster: &ClusterId,
        tags: &TagSet,
        taken_at: DateTime<Utc>,
    ) -> Result<Snapshot> {
        let snapshot = Snapshot {
            cluster: cluster.clone(),
            name: Snapshot::name_for(cluster, taken_at),
            created_at: taken_at,
            tags: tags.clone(),
        };

        let mut clusters = self.clusters.lock().unwrap();
        let records = clusters
            .get_mut(cluster)
            .ok_or_else(|| StoreError::UnknownCluster {
                cluster: cluster.to_string(),
            })?;
        records.push(snapshot.clone());
        Ok(snapshot)
    }

    async fn remove_tag(&self, snapshot: &Snapshot, cadence: Cadence) -> Result<()> {
        let mut clusters = self.clusters.lock().unwrap();
        let Some(records) = clusters.get_mut(&snapshot.cluster) else {
            return Ok(());
        };

        for record in records.iter_mut() {
            if record.name == snapshot.name {
                record.tags.remove(cadence);
            }
        }
        records.retain(|s| !s.tags.is_empty());
        Ok(())
    }
}

impl ClusterDirectory for MemoryStore {
    async fn list_clusters(&self) -> Result<Vec<ClusterId>> {
        Ok(self.clusters.lock().unwrap().keys().cloned().collect())
    }
}
