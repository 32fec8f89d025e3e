//! Snapshot record type.

use chrono::{DateTime, Utc};

use super::cadence::TagSet;
use super::id::ClusterId;

/// One stored point-in-time backup of a cluster.
///
/// A snapshot exists in storage iff its tag set is non-empty; the store
/// deletes the physical snapshot when the last cadence tag is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Owning cluster.
    pub cluster: ClusterId,
    /// Store-level identifier, `{cluster}-{YYYY-MM-DD}` at creation.
    pub name: String,
    /// Creation timestamp. Comparisons in the lifecycle logic are
    /// date-granular, but the full timestamp is kept as stored.
    pub created_at: DateTime<Utc>,
    /// Cadences currently claiming this snapshot.
    pub tags: TagSet,
}

impl Snapshot {
    /// The identifier a snapshot taken at `taken_at` receives.
    ///
    /// One creation per cluster per day means the date suffix keeps
    /// identifiers unique within a cluster.
    #[must_use]
    pub fn name_for(cluster: &ClusterId, taken_at: DateTime<Utc>) -> String {
        format!("{}-{}", cluster, taken_at.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn name_embeds_cluster_and_date() {
        let cluster = ClusterId::new("prod-orders");
        let taken_at = Utc.with_ymd_and_hms(2024, 9, 1, 4, 30, 0).unwrap();
        assert_eq!(
            Snapshot::name_for(&cluster, taken_at),
            "prod-orders-2024-09-01"
        );
    }
}
