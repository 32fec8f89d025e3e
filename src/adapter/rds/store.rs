//! RDS-backed snapshot store.
//!
//! Maps the store port onto manual DB cluster snapshots. Snapshots
//! managed by this tool are recognized by a single tag under
//! [`TOOL_TAG_KEY`] whose value is the space-joined set of cadence
//! names; other manual snapshots are never touched. Uses the AWS SDK
//! standard credential chain (environment, instance profile, etc.).

use aws_sdk_rds::error::SdkError;
use aws_sdk_rds::types::Tag;
use aws_sdk_rds::Client;
use aws_smithy_types::error::display::DisplayErrorContext;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{Cadence, ClusterId, Snapshot, TagSet};
use crate::error::{Result, StoreError};
use crate::port::{ClusterDirectory, SnapshotStore};

/// Tag key marking snapshots owned by this tool.
pub const TOOL_TAG_KEY: &str = "snapwarden";

/// Configuration for the RDS store client.
#[derive(Debug, Clone, Default)]
pub struct RdsStoreConfig {
    /// AWS region override; defaults to the environment's region.
    pub region: Option<String>,
    /// Optional endpoint URL for testing with localstack.
    pub endpoint_url: Option<String>,
}

/// Snapshot store backed by the RDS cluster snapshot API.
pub struct RdsStore {
    client: Client,
}

impl RdsStore {
    /// Build a client from the standard credential chain plus the given
    /// overrides.
    pub async fn connect(config: RdsStoreConfig) -> Self {
        let mut aws_config = aws_config::from_env();
        if let Some(region) = &config.region {
            aws_config = aws_config.region(aws_config::Region::new(region.clone()));
        }
        let aws_config = aws_config.load().await;

        let mut rds_config = aws_sdk_rds::config::Builder::from(&aws_config);
        if let Some(endpoint_url) = &config.endpoint_url {
            rds_config = rds_config.endpoint_url(endpoint_url);
        }

        Self {
            client: Client::from_conf(rds_config.build()),
        }
    }

    /// Wrap an existing SDK client (localstack tests).
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// The tool's tag set on a resource, if present.
    async fn tool_tags(&self, arn: &str, snapshot_name: &str) -> Result<Option<TagSet>> {
        let tags = self
            .client
            .list_tags_for_resource()
            .resource_name(arn)
            .send()
            .await
            .map_err(api_err)?;

        for tag in tags.tag_list() {
            if tag.key() == Some(TOOL_TAG_KEY) {
                let value = tag.value().unwrap_or_default();
                let parsed = TagSet::parse_tag_value(value).map_err(|source| {
                    StoreError::CorruptTagValue {
                        snapshot: snapshot_name.to_string(),
                        value: value.to_string(),
                        source,
                    }
                })?;
                return Ok(Some(parsed));
            }
        }
        Ok(None)
    }

    /// ARN of a snapshot by identifier, or `None` when it no longer
    /// exists (deleted by an earlier detag in the same run).
    async fn snapshot_arn(&self, name: &str) -> Result<Option<String>> {
        let resp = self
            .client
            .describe_db_cluster_snapshots()
            .db_cluster_snapshot_identifier(name)
            .send()
            .await;

        let resp = match resp {
            Ok(resp) => resp,
            Err(SdkError::ServiceError(err))
                if err.err().is_db_cluster_snapshot_not_found_fault() =>
            {
                return Ok(None);
            }
            Err(err) => return Err(api_err(err).into()),
        };

        Ok(resp
            .db_cluster_snapshots()
            .first()
            .and_then(|s| s.db_cluster_snapshot_arn())
            .map(ToString::to_string))
    }
}

impl SnapshotStore for RdsStore {
    async fn list_snapshots(&self, cluster: &ClusterId, cadence: Cadence) -> Result<Vec<Snapshot>> {
        let resp = self
            .client
            .describe_db_cluster_snapshots()
            .db_cluster_identifier(cluster.as_str())
            .snapshot_type("manual")
            .send()
            .await
            .map_err(api_err)?;

        let mut snapshots = Vec::new();
        for summary in resp.db_cluster_snapshots() {
            let (Some(name), Some(arn)) = (
                summary.db_cluster_snapshot_identifier(),
                summary.db_cluster_snapshot_arn(),
            ) else {
                continue;
            };
            // A snapshot still being created has no creation time yet;
            // it is not a lifecycle candidate.
            let Some(created_at) = summary
                .snapshot_create_time()
                .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos()))
            else {
                continue;
            };

            let Some(tags) = self.tool_tags(arn, name).await? else {
                continue;
            };
            if tags.contains(cadence) {
                snapshots.push(Snapshot {
                    cluster: cluster.clone(),
                    name: name.to_string(),
                    created_at,
                    tags,
                });
            }
        }

        snapshots.sort_by_key(|s| s.created_at);
        Ok(snapshots)
    }

    async fn create_snapshot(
        &self,
        cluster: &ClusterId,
        tags: &TagSet,
        taken_at: DateTime<Utc>,
    ) -> Result<Snapshot> {
        let name = Snapshot::name_for(cluster, taken_at);
        info!(cluster = %cluster, snapshot = %name, tags = %tags, "creating snapshot");

        self.client
            .create_db_cluster_snapshot()
            .db_cluster_snapshot_identifier(&name)
            .db_cluster_identifier(cluster.as_str())
            .tags(
                Tag::builder()
                    .key(TOOL_TAG_KEY)
                    .value(tags.to_tag_value())
                    .build(),
            )
            .send()
            .await
            .map_err(api_err)?;

        Ok(Snapshot {
            cluster: cluster.clone(),
            name,
            created_at: taken_at,
            tags: tags.clone(),
        })
    }

    async fn remove_tag(&self, snapshot: &Snapshot, cadence: Cadence) -> Result<()> {
        let Some(arn) = self.snapshot_arn(&snapshot.name).await? else {
            debug!(snapshot = %snapshot.name, "snapshot already deleted, skipping detag");
            return Ok(());
        };

        let Some(mut tags) = self.tool_tags(&arn, &snapshot.name).await? else {
            debug!(snapshot = %snapshot.name, "snapshot no longer tool-tagged, skipping detag");
            return Ok(());
        };
        if !tags.remove(cadence) {
            return Ok(());
        }

        if tags.is_empty() {
            info!(snapshot = %snapshot.name, %cadence, "deleting snapshot");
            self.client
                .delete_db_cluster_snapshot()
                .db_cluster_snapshot_identifier(&snapshot.name)
                .send()
                .await
                .map_err(api_err)?;
        } else {
            info!(snapshot = %snapshot.name, %cadence, remaining = %tags, "removing cadence tag");
            self.client
                .add_tags_to_resource()
                .resource_name(&arn)
                .tags(
                    Tag::builder()
                        .key(TOOL_TAG_KEY)
                        .value(tags.to_tag_value())
                        .build(),
                )
                .send()
                .await
                .map_err(api_err)?;
        }
        Ok(())
    }
}

impl ClusterDirectory for RdsStore {
    async fn list_clusters(&self) -> Result<Vec<ClusterId>> {
        let resp = self
            .client
            .describe_db_clusters()
            .send()
            .await
            .map_err(api_err)?;

        Ok(resp
            .db_clusters()
            .iter()
            .filter_map(|c| c.db_cluster_identifier())
            .map(ClusterId::new)
            .collect())
    }
}

fn api_err<E, R>(err: SdkError<E, R>) -> StoreError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    StoreError::Api(DisplayErrorContext(&err).to_string())
}
