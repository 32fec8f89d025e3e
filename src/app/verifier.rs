//! Cluster existence verification.

use tracing::debug;

use crate::config::ClusterSelector;
use crate::domain::ClusterId;
use crate::error::{Error, Result};
use crate::port::ClusterDirectory;

/// Resolve the configured selector into the clusters to process.
///
/// `ALL` takes the directory listing as-is (a discovered set needs no
/// re-verification). An explicit list is checked against the directory;
/// any absent cluster aborts before snapshot work begins.
pub async fn resolve_clusters<D: ClusterDirectory>(
    directory: &D,
    selector: &ClusterSelector,
) -> Result<Vec<ClusterId>> {
    let existing = directory.list_clusters().await?;

    match selector {
        ClusterSelector::All => Ok(existing),
        ClusterSelector::Named(requested) => {
            for cluster in requested {
                debug!(cluster = %cluster, "checking cluster exists");
                if !existing.contains(cluster) {
                    return Err(Error::ClusterNotFound {
                        cluster: cluster.to_string(),
                    });
                }
            }
            Ok(requested.clone())
        }
    }
}
