//! Retention policy evaluation.
//!
//! [`evaluate`] is the decision core of the tool: a pure function of the
//! current date, one tier's rule, and that tier's existing snapshots. It
//! never touches the store, which is what makes the two-year simulation
//! runs in the test suite cheap to drive.

use chrono::{DateTime, Datelike, Month, Utc, Weekday};

use super::cadence::Cadence;
use super::snapshot::Snapshot;

/// Calendar condition under which a tier fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fires when both day-of-month and month match.
    Yearly { month: Month, day: u32 },
    /// Fires when the day-of-month matches.
    Monthly { day: u32 },
    /// Fires on the given weekday.
    Weekly { weekday: Weekday },
}

impl Trigger {
    /// Whether `now` satisfies this trigger.
    #[must_use]
    pub fn matches(&self, now: DateTime<Utc>) -> bool {
        match *self {
            Trigger::Yearly { month, day } => {
                now.day() == day && now.month() == month.number_from_month()
            }
            Trigger::Monthly { day } => now.day() == day,
            Trigger::Weekly { weekday } => now.weekday() == weekday,
        }
    }
}

/// Retention count plus trigger rule for one cadence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionRule {
    /// Snapshots to keep tagged for this tier. Zero disables the tier
    /// and purges everything it still tags.
    pub retention: u32,
    pub trigger: Trigger,
}

/// The full three-tier schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub yearly: RetentionRule,
    pub monthly: RetentionRule,
    pub weekly: RetentionRule,
}

impl Schedule {
    /// The rule for a given cadence.
    #[must_use]
    pub fn rule(&self, cadence: Cadence) -> &RetentionRule {
        match cadence {
            Cadence::Yearly => &self.yearly,
            Cadence::Monthly => &self.monthly,
            Cadence::Weekly => &self.weekly,
        }
    }
}

/// Outcome of evaluating one tier for one cluster on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Whether today satisfies the tier's trigger rule.
    pub triggers_today: bool,
    /// Snapshots beyond retention, oldest first. These must lose this
    /// tier's tag (and be deleted once no tier claims them).
    pub excess: Vec<Snapshot>,
}

/// Evaluate one tier against its existing snapshots.
///
/// `snapshots` must be the tier's snapshots sorted by creation time
/// ascending, as returned by the store port. When the tier triggers
/// today, one retention slot is reserved for the snapshot about to be
/// created, so the effective retention drops by one.
#[must_use]
pub fn evaluate(now: DateTime<Utc>, rule: &RetentionRule, snapshots: &[Snapshot]) -> Evaluation {
    if rule.retention == 0 {
        // Disabled tier: full purge, and never a new snapshot.
        return Evaluation {
            triggers_today: false,
            excess: snapshots.to_vec(),
        };
    }

    let triggers_today = rule.trigger.matches(now);
    let effective = rule.retention as usize - usize::from(triggers_today);

    let excess = if snapshots.len() >= effective {
        snapshots[..snapshots.len() - effective].to_vec()
    } else {
        Vec::new()
    };

    Evaluation {
        triggers_today,
        excess,
    }
}
