//! JSON-file snapshot store for simulated runs.
//!
//! State is a mapping from cluster identifier to an ordered list of
//! `{ tag, created_at }` records, read and rewritten as a whole on every
//! operation so a driver can inspect it between steps. Record identity
//! for tag removal is (cluster, creation date): one snapshot per cluster
//! per day is the tool's own creation invariant.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Cadence, ClusterId, Snapshot, TagSet};
use crate::error::{Result, StoreError};
use crate::port::{ClusterDirectory, SnapshotStore};

/// One persisted snapshot record. The tag set is stored in the same
/// space-joined string form the live store writes to RDS.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSnapshot {
    tag: String,
    created_at: DateTime<Utc>,
}

type StoreFile = BTreeMap<String, Vec<StoredSnapshot>>;

/// Snapshot store persisted in a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store backed by an existing file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the store file with an empty snapshot list per cluster,
    /// replacing any previous content.
    pub fn seed(path: impl Into<PathBuf>, clusters: &[ClusterId]) -> Result<Self> {
        let store = Self::new(path);
        let file: StoreFile = clusters
            .iter()
            .map(|c| (c.to_string(), Vec::new()))
            .collect();
        store.save(&file)?;
        Ok(store)
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every snapshot in the store, across all clusters and tiers,
    /// sorted by cluster then creation time. Driver-side inspection.
    pub fn all_snapshots(&self) -> Result<Vec<Snapshot>> {
        let file = self.load()?;
        let mut snapshots = Vec::new();
        for (cluster, records) in &file {
            let cluster = ClusterId::new(cluster.as_str());
            for record in records {
                snapshots.push(to_snapshot(&cluster, record)?);
            }
        }
        Ok(snapshots)
    }

    fn load(&self) -> Result<StoreFile> {
        let content = fs::read_to_string(&self.path).map_err(StoreError::Io)?;
        let file = serde_json::from_str(&content).map_err(StoreError::Decode)?;
        Ok(file)
    }

    fn save(&self, file: &StoreFile) -> Result<()> {
        let content = serde_json::to_string_pretty(file).map_err(StoreError::Decode)?;
        fs::write(&self.path, content).map_err(StoreError::Io)?;
        Ok(())
    }
}

fn to_snapshot(cluster: &ClusterId, record: &StoredSnapshot) -> Result<Snapshot> {
    let tags = TagSet::parse_tag_value(&record.tag).map_err(|source| StoreError::CorruptTagValue {
        snapshot: Snapshot::name_for(cluster, record.created_at),
        value: record.tag.clone(),
        source,
    })?;
    Ok(Snapshot {
        cluster: cluster.clone(),
        name: Snapshot::name_for(cluster, record.created_at),
        created_at: record.created_at,
        tags,
    })
}

impl SnapshotStore for FileStore {
    async fn list_snapshots(&self, cluster: &ClusterId, cadence: Cadence) -> Result<Vec<Snapshot>> {
        let file = self.load()?;
        let records = file
            .get(cluster.as_str())
            .ok_or_else(|| StoreError::UnknownCluster {
                cluster: cluster.to_string(),
            })?;

        let mut snapshots = Vec::new();
        for record in records {
            let snapshot = to_snapshot(cluster, record)?;
            if snapshot.tags.contains(cadence) {
                snapshots.push(snapshot);
            }
        }
        // Stable sort keeps store order for same-instant records.
        snapshots.sort_by_key(|s| s.created_at);
        Ok(snapshots)
    }

    async fn create_snapshot(
        &self,
        cluster: &ClusterId,
        tags: &TagSet,
        taken_at: DateTime<Utc>,
    ) -> Result<Snapshot> {
        let mut file = self.load()?;
        let records = file
            .get_mut(cluster.as_str())
            .ok_or_else(|| StoreError::UnknownCluster {
                cluster: cluster.to_string(),
            })?;

        records.push(StoredSnapshot {
            tag: tags.to_tag_value(),
            created_at: taken_at,
        });
        self.save(&file)?;

        Ok(Snapshot {
            cluster: cluster.clone(),
            name: Snapshot::name_for(cluster, taken_at),
            created_at: taken_at,
            tags: tags.clone(),
        })
    }

    async fn remove_tag(&self, snapshot: &Snapshot, cadence: Cadence) -> Result<()> {
        let mut file = self.load()?;
        let Some(records) = file.get_mut(snapshot.cluster.as_str()) else {
            // Cluster entry already gone: nothing to detag.
            return Ok(());
        };

        let target_date = snapshot.created_at.date_naive();
        let mut keep = Vec::with_capacity(records.len());
        for record in records.drain(..) {
            if record.created_at.date_naive() != target_date {
                keep.push(record);
                continue;
            }

            let mut tags =
                TagSet::parse_tag_value(&record.tag).map_err(|source| StoreError::CorruptTagValue {
                    snapshot: snapshot.name.clone(),
                    value: record.tag.clone(),
                    source,
                })?;
            tags.remove(cadence);
            if tags.is_empty() {
                info!(snapshot = %snapshot.name, %cadence, "deleting snapshot");
                continue;
            }
            debug!(snapshot = %snapshot.name, %cadence, remaining = %tags, "removing cadence tag");
            keep.push(StoredSnapshot {
                tag: tags.to_tag_value(),
                created_at: record.created_at,
            });
        }
        *records = keep;

        self.save(&file)
    }
}

impl ClusterDirectory for FileStore {
    async fn list_clusters(&self) -> Result<Vec<ClusterId>> {
        let file = self.load()?;
        Ok(file.keys().map(ClusterId::new).collect())
    }
}
