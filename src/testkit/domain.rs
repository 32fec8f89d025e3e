//! Builders for domain primitives.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Cadence, ClusterId, Snapshot, TagSet};

/// A UTC instant at 03:00 on the given date, roughly when a nightly
/// maintenance window would fire.
#[must_use]
pub fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 3, 0, 0).unwrap()
}

/// A snapshot with the tool's naming convention and the given tags.
#[must_use]
pub fn snapshot(cluster: &ClusterId, created_at: DateTime<Utc>, tags: &[Cadence]) -> Snapshot {
    Snapshot {
        cluster: cluster.clone(),
        name: Snapshot::name_for(cluster, created_at),
        created_at,
        tags: tags.iter().copied().collect::<TagSet>(),
    }
}
